use once_cell::sync::Lazy;

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime")
});

/// Runs `fut` on the tokio runtime and hands its output to `on_done` on
/// the GTK main context, where widgets may be touched.
pub fn run_async_to_main<T, Fut, F>(fut: Fut, on_done: F)
where
    T: Send + 'static,
    Fut: std::future::Future<Output = T> + Send + 'static,
    F: FnOnce(T) + 'static,
{
    let handle = RUNTIME.spawn(fut);
    glib::MainContext::default().spawn_local(async move {
        match handle.await {
            Ok(out) => on_done(out),
            Err(e) => log::warn!("background task failed: {e}"),
        }
    });
}

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `3135.15` -> `$3,135.15`
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// `6480.0` -> `$6,480`
pub fn format_usd_whole(amount: f64) -> String {
    let whole = amount.abs().round() as u64;
    let sign = if amount < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(whole))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents() {
        assert_eq!(format_usd(60.0), "$60.00");
        assert_eq!(format_usd(3135.15), "$3,135.15");
        assert_eq!(format_usd(12450.89), "$12,450.89");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-15.5), "-$15.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn formats_whole_dollars() {
        assert_eq!(format_usd_whole(6480.0), "$6,480");
        assert_eq!(format_usd_whole(999.0), "$999");
        assert_eq!(format_usd_whole(100_000.0), "$100,000");
    }
}
