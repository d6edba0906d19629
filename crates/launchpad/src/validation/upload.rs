// File: src/validation/upload.rs
// Purpose: Image upload checks against the accepted types and size limit

use super::{ValidationErrors, ViolationKind};
use crate::constants::{ACCEPTED_IMAGE_TYPES, MAX_FILE_SIZE};

pub fn is_accepted_image_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();
    ACCEPTED_IMAGE_TYPES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(mime))
}

/// Check an uploaded image's declared type and size.
///
/// No route accepts uploads yet; this is a library helper for upload
/// handlers to call before storing a file.
pub fn validate_image_upload(content_type: &str, size: usize) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !is_accepted_image_type(content_type) {
        errors.push(
            "file_type",
            ViolationKind::FormatInvalid,
            format!(
                "Only {} images are accepted",
                ACCEPTED_IMAGE_TYPES.join(", ")
            ),
        );
    }

    if size > MAX_FILE_SIZE {
        errors.push(
            "file_size",
            ViolationKind::MaxLengthExceeded,
            "Max file size is 5MB",
        );
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_types() {
        assert!(is_accepted_image_type("image/png"));
        assert!(is_accepted_image_type("IMAGE/JPEG"));
        assert!(is_accepted_image_type("image/webp; charset=binary"));
        assert!(!is_accepted_image_type("image/gif"));
        assert!(!is_accepted_image_type("application/pdf"));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_image_upload("image/png", MAX_FILE_SIZE).is_ok());

        let errors = validate_image_upload("image/png", MAX_FILE_SIZE + 1).unwrap_err();
        assert_eq!(errors.fields(), vec!["file_size"]);
    }

    #[test]
    fn test_reports_both_violations() {
        let errors = validate_image_upload("text/plain", MAX_FILE_SIZE * 2).unwrap_err();
        assert_eq!(errors.fields(), vec!["file_type", "file_size"]);
    }
}
