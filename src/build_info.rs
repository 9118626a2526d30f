//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_stamp.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stamp_not_empty() {
        assert!(!BUILD_STAMP.is_empty());
    }

    #[test]
    fn test_build_stamp_is_date_then_commit() {
        // "YYYY-MM-DD <commit>"
        let mut parts = BUILD_STAMP.split(' ');
        assert_eq!(parts.next().unwrap().len(), 10);
        assert!(parts.next().is_some());
    }
}
