/// Records message about an internal step of processing.
/// Messages are kept only if `for_testing` feature is enabled.
macro_rules! test_log {
    ($s:expr) => {
        #[cfg(feature = "for_testing")]
        {
            crate::testing::log_message($s);
        }
    };
}
