//! Tests for row progress tracking

#[cfg(test)]
mod tests {
    use escapefield::io::progress::RowProgress;
    use std::thread;

    // Tests hidden progress still counts rows
    // Verified by skipping the increment when hidden
    #[test]
    fn test_hidden_progress_counts() {
        let progress = RowProgress::new(20, false);

        progress.advance(3);
        progress.advance(7);
        assert_eq!(progress.position(), 10);

        progress.finish();
    }

    // Tests visible progress lifecycle
    // Verified by panicking on finish
    #[test]
    fn test_visible_progress_lifecycle() {
        let progress = RowProgress::new(5, true);

        progress.advance(5);
        assert_eq!(progress.position(), 5);

        progress.finish();
    }

    // Tests concurrent updates from several threads
    // Verified by resetting position on every update
    #[test]
    fn test_concurrent_advance() {
        let progress = RowProgress::new(400, false);

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        progress.advance(1);
                    }
                });
            }
        });

        assert_eq!(progress.position(), 400);
        progress.finish();
    }
}
