/// Effective limit with precedence: local arg, then global flag, then config.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback).max(1)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::effective_limit;

    #[rstest]
    #[case(Some(5), Some(10), 5)]
    #[case(None, Some(10), 10)]
    #[case(None, None, 50)]
    #[case(Some(0), None, 1)]
    fn precedence(#[case] local: Option<u32>, #[case] global: Option<u32>, #[case] want: u32) {
        assert_eq!(effective_limit(local, global, 50), want);
    }
}
