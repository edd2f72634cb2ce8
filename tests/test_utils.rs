// these helpers are used by other modules in the test directory
#![allow(unused_macros)]
#![allow(unused_imports)]
#![allow(dead_code)]

macro_rules! search_check {
    ($haystack:expr, $key:expr => $found:expr) => {
        assert_eq!(linscan::search(&$haystack, &$key), $found);
    };

    ($haystack:expr, $key:expr => $found:expr; $($rest:tt)+) => {
        search_check!($haystack, $key => $found);
        search_check!($($rest)+);
    };
}

pub(crate) use search_check;
