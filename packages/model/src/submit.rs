/// Forms whose submit request is still in flight.
///
/// A form is claimed with [`begin`](Self::begin) before its request is sent and
/// released by [`complete`](Self::complete) when the response arrives, whether
/// it succeeded or not. While claimed, further submits of that form are refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitGuard<K> {
    busy: Vec<K>,
}

impl<K> Default for SubmitGuard<K> {
    fn default() -> Self {
        Self { busy: Vec::new() }
    }
}

impl<K: Copy + Eq> SubmitGuard<K> {
    /// Claim `form`. Returns `false` if a request for it is already running.
    pub fn begin(&mut self, form: K) -> bool {
        if self.is_busy(form) {
            return false;
        }
        self.busy.push(form);
        true
    }

    /// Release `form` and hand back the request's outcome.
    pub fn complete<T, E>(&mut self, form: K, result: Result<T, E>) -> Result<T, E> {
        self.busy.retain(|busy| *busy != form);
        result
    }

    pub fn is_busy(&self, form: K) -> bool {
        self.busy.contains(&form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submit_while_busy_is_refused() {
        let mut guard = SubmitGuard::default();
        assert!(guard.begin("profile"));
        assert!(guard.is_busy("profile"));
        assert!(!guard.begin("profile"));

        // Other forms are independent.
        assert!(guard.begin("avatar"));
    }

    #[test]
    fn test_success_releases_the_form() {
        let mut guard = SubmitGuard::default();
        guard.begin("profile");
        let result: Result<u32, String> = guard.complete("profile", Ok(7));
        assert_eq!(result, Ok(7));
        assert!(!guard.is_busy("profile"));
        assert!(guard.begin("profile"));
    }

    #[test]
    fn test_failure_releases_the_form() {
        let mut guard = SubmitGuard::default();
        guard.begin("new-place");
        guard.begin("avatar");
        let result: Result<(), &str> = guard.complete("new-place", Err("502"));
        assert_eq!(result, Err("502"));
        assert!(!guard.is_busy("new-place"));
        assert!(guard.is_busy("avatar"));
        assert!(guard.begin("new-place"));
    }
}
