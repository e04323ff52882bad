use crate::error::RecordError;

/// Accepts text that still has something left after trimming.
/// The value is kept as given, surrounding whitespace included.
pub fn non_blank(field: &'static str, value: impl Into<String>) -> Result<String, RecordError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(RecordError::InvalidArgument {
            field,
            reason: "must not be empty",
        });
    }
    Ok(value)
}

/// Accepts numbers strictly greater than zero. NaN never passes.
pub fn positive<N>(field: &'static str, value: N) -> Result<N, RecordError>
where
    N: PartialOrd + Default,
{
    if value > N::default() {
        Ok(value)
    } else {
        Err(RecordError::InvalidArgument {
            field,
            reason: "must be greater than 0",
        })
    }
}

/// Like [`positive`] for real numbers, also turning away infinity.
pub fn positive_finite(field: &'static str, value: f32) -> Result<f32, RecordError> {
    if value.is_infinite() {
        return Err(RecordError::InvalidArgument {
            field,
            reason: "must be a finite number",
        });
    }
    positive(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(non_blank("title", "").is_err());
        assert!(non_blank("title", "   \t").is_err());
    }

    #[test]
    fn text_is_kept_untrimmed() {
        assert_eq!(non_blank("title", " Flor de lino ").unwrap(), " Flor de lino ");
    }

    #[test]
    fn numbers_must_be_strictly_positive() {
        assert_eq!(positive("age", 1).unwrap(), 1);
        assert!(positive("age", 0).is_err());
        assert!(positive("id", -3_i64).is_err());
        assert!(positive("duration", 0.0_f32).is_err());
        assert!(positive("duration", f32::NAN).is_err());
        assert_eq!(positive("duration", 2.47_f32).unwrap(), 2.47);
    }

    #[test]
    fn durations_must_be_finite() {
        assert!(positive_finite("duration", f32::INFINITY).is_err());
        assert!(positive_finite("duration", f32::NEG_INFINITY).is_err());
        assert!(positive_finite("duration", f32::NAN).is_err());
        assert!(positive_finite("duration", 0.0).is_err());
        assert_eq!(positive_finite("duration", 8.27).unwrap(), 8.27);
        assert_eq!(
            positive_finite("duration", f32::INFINITY).unwrap_err().to_string(),
            "invalid duration: must be a finite number"
        );
    }

    #[test]
    fn error_names_the_field() {
        let err = positive("id", 0_i64).unwrap_err();
        assert_eq!(err.to_string(), "invalid id: must be greater than 0");
    }
}
