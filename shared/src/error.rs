use thiserror::Error;

use crate::section::SectionId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortfolioError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("window height could not be measured")]
    ViewportUnmeasurable,

    #[error("anchor element for section '{0}' is not attached")]
    AnchorMissing(SectionId),
}

pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PortfolioError::ViewportUnmeasurable.to_string(),
            "window height could not be measured"
        );
        assert_ne!(
            PortfolioError::ViewportUnmeasurable.to_string(),
            PortfolioError::NoWindow.to_string()
        );
        assert_eq!(
            PortfolioError::AnchorMissing(SectionId::Languages).to_string(),
            "anchor element for section 'languages' is not attached"
        );
    }
}
