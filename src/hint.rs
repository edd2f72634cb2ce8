use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "unstable")] {
        /// Hints that `b` is almost always `true`. Returns `b` unchanged.
        #[inline(always)]
        pub fn likely(b: bool) -> bool {
            core::hint::likely(b)
        }

        /// Hints that `b` is almost always `false`. Returns `b` unchanged.
        #[inline(always)]
        pub fn unlikely(b: bool) -> bool {
            core::hint::unlikely(b)
        }
    } else {
        // stable stand-in for the branch-weight intrinsics: a call into a
        // #[cold] function marks that side of the branch as the unexpected one
        #[inline]
        #[cold]
        fn cold() {}

        /// Hints that `b` is almost always `true`. Returns `b` unchanged.
        #[inline(always)]
        pub fn likely(b: bool) -> bool {
            if !b {
                cold();
            }
            b
        }

        /// Hints that `b` is almost always `false`. Returns `b` unchanged.
        #[inline(always)]
        pub fn unlikely(b: bool) -> bool {
            if b {
                cold();
            }
            b
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_are_identity() {
        assert!(likely(true));
        assert!(!likely(false));
        assert!(unlikely(true));
        assert!(!unlikely(false));
    }
}
