/// Formats to standard error without a trailing newline. Callers decide
/// the layout; an empty argument list after the format string is fine.
#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        eprint!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn formats_like_eprint() {
        // smoke the forwarding; output itself goes to the test harness's
        // captured stderr
        print_error!("code {}: {}", 3, "worked");
        print_error!("plain");
    }
}
