use adw::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::app::AppConfig;
use crate::bank::avatar::AvatarClient;

/// Avatars waiting on a download, keyed by seed. Only the first request
/// for a seed starts a fetch; later ones queue behind it.
struct Waiters<T> {
    pending: HashMap<String, Vec<T>>,
}

impl<T> Default for Waiters<T> {
    fn default() -> Self {
        Self { pending: HashMap::new() }
    }
}

impl<T> Waiters<T> {
    /// Queues `waiter` and returns true when no fetch for `seed` is running yet.
    fn enqueue(&mut self, seed: &str, waiter: T) -> bool {
        match self.pending.get_mut(seed) {
            Some(queue) => {
                queue.push(waiter);
                false
            }
            None => {
                self.pending.insert(seed.to_string(), vec![waiter]);
                true
            }
        }
    }

    fn finish(&mut self, seed: &str) -> Vec<T> {
        self.pending.remove(seed).unwrap_or_default()
    }
}

/// Hands out `adw::Avatar`s that show local initials at once and swap
/// in the remote image when it arrives. Textures are cached per seed and
/// each seed is downloaded at most once at a time.
pub struct AvatarLoader {
    client: Option<AvatarClient>,
    cache: Rc<RefCell<HashMap<String, gtk::gdk::Texture>>>,
    waiting: Rc<RefCell<Waiters<glib::WeakRef<adw::Avatar>>>>,
}

impl AvatarLoader {
    pub fn new(config: &AppConfig) -> Rc<Self> {
        let client = if config.load_avatars {
            AvatarClient::from_config(config)
                .map_err(|e| log::warn!("avatars disabled: {e}"))
                .ok()
        } else {
            None
        };
        Rc::new(Self { client, cache: Rc::default(), waiting: Rc::default() })
    }

    pub fn avatar(&self, seed: &str, size: i32) -> adw::Avatar {
        let avatar = adw::Avatar::new(size, Some(seed), true);
        if let Some(texture) = self.cache.borrow().get(seed) {
            avatar.set_custom_image(Some(texture));
            return avatar;
        }
        let Some(client) = self.client.clone() else {
            return avatar;
        };
        if !self.waiting.borrow_mut().enqueue(seed, avatar.downgrade()) {
            log::debug!("avatar for {seed:?} already downloading");
            return avatar;
        }

        let seed_owned = seed.to_string();
        let cache = Rc::downgrade(&self.cache);
        let waiting = Rc::downgrade(&self.waiting);
        crate::utils::run_async_to_main(
            async move {
                let res = client.fetch(&seed_owned).await;
                (seed_owned, res)
            },
            move |(seed, res)| {
                let targets = match waiting.upgrade() {
                    Some(waiting) => waiting.borrow_mut().finish(&seed),
                    None => return,
                };
                let bytes = match res {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        log::warn!("avatar for {seed:?} unavailable: {e}");
                        return;
                    }
                };
                match gtk::gdk::Texture::from_bytes(&glib::Bytes::from_owned(bytes)) {
                    Ok(texture) => {
                        for avatar in targets.iter().filter_map(|t| t.upgrade()) {
                            avatar.set_custom_image(Some(&texture));
                        }
                        if let Some(cache) = cache.upgrade() {
                            cache.borrow_mut().insert(seed, texture);
                        }
                    }
                    Err(e) => log::warn!("avatar for {seed:?} is not an image: {e}"),
                }
            },
        );
        avatar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_request_per_seed_starts_a_fetch() {
        let mut waiters = Waiters::default();
        assert!(waiters.enqueue("JD", 1));
        assert!(!waiters.enqueue("JD", 2));
        assert!(waiters.enqueue("JS", 3));
        assert_eq!(waiters.finish("JD"), vec![1, 2]);
        assert_eq!(waiters.finish("JS"), vec![3]);
    }

    #[test]
    fn finished_seed_can_be_fetched_again() {
        let mut waiters = Waiters::default();
        assert!(waiters.enqueue("AS", 'a'));
        assert_eq!(waiters.finish("AS"), vec!['a']);
        assert!(waiters.finish("AS").is_empty());
        assert!(waiters.enqueue("AS", 'b'));
    }
}
