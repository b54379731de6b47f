use std::fmt::Display;
use std::future::Future;

/// API fetch state enum
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            Self::NotStarted => FetchState::NotStarted,
            Self::Loading => FetchState::Loading,
            Self::Success(data) => FetchState::Success(f(data)),
            Self::Error(err) => FetchState::Error(err),
        }
    }

    /// Pair two states. An error on either side wins, then loading.
    pub fn zip<U>(self, other: FetchState<U>) -> FetchState<(T, U)> {
        match (self, other) {
            (Self::Error(err), _) | (_, FetchState::Error(err)) => FetchState::Error(err),
            (Self::Success(left), FetchState::Success(right)) => FetchState::Success((left, right)),
            (Self::NotStarted, FetchState::NotStarted) => FetchState::NotStarted,
            _ => FetchState::Loading,
        }
    }

    /// Terminal state for a settled request.
    pub fn settled<E: Display>(result: Result<T, E>, fallback_message: &str) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => {
                let message = err.to_string();
                if message.trim().is_empty() {
                    Self::Error(fallback_message.to_string())
                } else {
                    Self::Error(message)
                }
            }
        }
    }
}

/// Run one fetch, publishing `Loading` first and then exactly one terminal state.
pub async fn drive_fetch<T, E, Fut, S>(fetch: Fut, fallback_message: &str, mut publish: S)
where
    E: Display,
    Fut: Future<Output = Result<T, E>>,
    S: FnMut(FetchState<T>),
{
    publish(FetchState::Loading);
    let result = fetch.await;
    publish(FetchState::settled(result, fallback_message));
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn record<T: Clone>(result: Result<T, String>) -> Vec<FetchState<T>> {
        let mut states = Vec::new();
        drive_fetch(async move { result }, "fallback", |state| states.push(state)).await;
        states
    }

    #[tokio::test]
    async fn test_loading_settles_once_on_success() {
        let states = record(Ok(7)).await;
        assert_eq!(states, vec![FetchState::Loading, FetchState::Success(7)]);
    }

    #[tokio::test]
    async fn test_loading_settles_once_on_failure() {
        let states = record::<u32>(Err("boom".to_string())).await;
        assert_eq!(states.len(), 2);
        assert!(states[0].is_loading());
        assert_eq!(states[1].error().map(String::as_str), Some("boom"));
        assert!(states[1].data().is_none());
    }

    #[test]
    fn test_zip_waits_for_both_and_surfaces_errors() {
        let done: FetchState<u32> = FetchState::Success(3);
        assert_eq!(done.clone().zip(FetchState::Success("x")), FetchState::Success((3, "x")));
        assert_eq!(done.clone().zip(FetchState::<&str>::Loading), FetchState::Loading);
        assert_eq!(
            FetchState::<u32>::Loading.zip(FetchState::<&str>::Error("down".to_string())),
            FetchState::Error("down".to_string())
        );
        assert_eq!(done.zip(FetchState::Success(4)).map(|(a, b)| a + b), FetchState::Success(7));
        assert_eq!(
            FetchState::<u32>::Error("first".to_string()).zip(FetchState::<&str>::Error("second".to_string())),
            FetchState::Error("first".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_error_message_uses_fallback() {
        let states = record::<u32>(Err(String::new())).await;
        assert_eq!(states[1], FetchState::Error("fallback".to_string()));
    }
}
