use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use migrator_core::AppViewModel;
use migrator_engine::AtomicFileWriter;
use migrator_logging::migrate_info;

/// What the harness ended up showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Output,
    Notification,
    Nothing,
}

/// Presents the final view: the notification on stderr, or the converted
/// text verbatim to `output_path` / `stdout`.
pub fn render(
    view: &AppViewModel,
    output_path: Option<&Path>,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> anyhow::Result<Rendered> {
    if let Some(message) = &view.notification {
        writeln!(stderr, "{message}")?;
        return Ok(Rendered::Notification);
    }
    let Some(output) = &view.output else {
        return Ok(Rendered::Nothing);
    };

    match output_path {
        Some(path) => {
            let writer = AtomicFileWriter::new(path);
            let target = writer
                .write(output)
                .with_context(|| format!("writing converted post to {:?}", path))?;
            migrate_info!("Wrote converted post to {:?}", target);
        }
        None => {
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(Rendered::Output)
}

pub fn render_to_terminal(
    view: &AppViewModel,
    output_path: Option<&Path>,
) -> anyhow::Result<Rendered> {
    render(view, output_path, &mut io::stdout().lock(), &mut io::stderr().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(output: Option<&str>, notification: Option<&str>) -> AppViewModel {
        AppViewModel {
            output: output.map(str::to_string),
            notification: notification.map(str::to_string),
        }
    }

    #[test]
    fn output_goes_to_stdout_verbatim() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let rendered = render(&view(Some("a\n\nb"), None), None, &mut out, &mut err).unwrap();

        assert_eq!(rendered, Rendered::Output);
        assert_eq!(out, b"a\n\nb");
        assert!(err.is_empty());
    }

    #[test]
    fn notification_goes_to_stderr() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let model = view(None, Some("input is empty"));
        let rendered = render(&model, None, &mut out, &mut err).unwrap();

        assert_eq!(rendered, Rendered::Notification);
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "input is empty\n");
    }

    #[test]
    fn output_file_is_written() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("post.txt");
        let (mut out, mut err) = (Vec::new(), Vec::new());

        render(&view(Some("done"), None), Some(&path), &mut out, &mut err).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "done");
        assert!(out.is_empty());
    }
}
