use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

pub(crate) const COMMENT_ID_OUTPUT: &str = "comment-id";

/// Publish `comment-id` to the step output file, or stdout when there is none.
pub(crate) fn publish_comment_id(output_path: Option<&Path>, comment_id: u64) -> Result<()> {
    let line = format!("{COMMENT_ID_OUTPUT}={comment_id}\n");
    match output_path {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open output file {}", path.display()))?;
            file.write_all(line.as_bytes())
                .with_context(|| format!("failed to write output file {}", path.display()))?;
        }
        None => print!("{line}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::publish_comment_id;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn functional_publish_comment_id_appends_to_existing_output_file() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("output");
        fs::write(&path, "other=1\n").expect("seed output");

        publish_comment_id(Some(&path), 321).expect("publish");
        assert_eq!(
            fs::read_to_string(&path).expect("read output"),
            "other=1\ncomment-id=321\n"
        );
    }

    #[test]
    fn regression_publish_comment_id_reports_unwritable_path() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("missing-dir").join("output");
        let error = publish_comment_id(Some(&path), 1).expect_err("should fail");
        assert!(error.to_string().contains("failed to open output file"));
    }
}
