use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("action {0} is not a condition")]
    NotACondition(String),
    #[error("action {0} does not update the stack")]
    NoStackUpdate(String),
    #[error("empty action sequence")]
    EmptySeq,
    #[error("condition {action} at position {index} is not the first action")]
    ConditionNotFirst { index: usize, action: String },
    #[error("stack update {action} at position {index} is not the last action")]
    StackUpdateNotLast { index: usize, action: String },
    #[error("flag '{0}' popped while not pushed")]
    UnbalancedPop(String),
    #[error("flag '{0}' filtered while not pushed")]
    FilterUnpushed(String),
    #[error("flags left pushed: {}", .0.join(", "))]
    UnpoppedFlags(Vec<String>),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_text() {
        assert_eq!(
            Error::NotACondition("PopFlag(in)".to_string()).to_string(),
            "action PopFlag(in) is not a condition"
        );
        assert_eq!(
            Error::StackUpdateNotLast {
                index: 0,
                action: "Reduce(E, 1, 0)".to_string()
            }
            .to_string(),
            "stack update Reduce(E, 1, 0) at position 0 is not the last action"
        );
        assert_eq!(
            Error::UnpoppedFlags(vec!["in".to_string(), "yield".to_string()]).to_string(),
            "flags left pushed: in, yield"
        );
    }
}
