use std::path::PathBuf;

use clipocr_io::ClipboardSource;
use clipocr_ocr::Recognizer;
use clipocr_types::Notice;

use crate::editor::HistoryEditor;
use crate::error::SessionError;
use crate::pipeline::{self, RecognizeOptions, Recognition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The user dismissed the path picker
    Cancelled,
    Written { path: PathBuf, entries: usize },
}

impl ExportOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            ExportOutcome::Cancelled => None,
            ExportOutcome::Written { path, .. } => Some(Notice::info(
                "Success",
                format!("History exported to {}", path.display()),
            )),
        }
    }
}

/// Recognized text of the current run, oldest first.
///
/// Grows only through `record`; shrinks or changes only through a full
/// `replace_history` coming back from a history editor.
#[derive(Debug, Default, Clone)]
pub struct Session {
    history: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Recognize the clipboard image and append the text.
    /// On any error the history is left as it was.
    pub fn recognize(
        &mut self,
        clipboard: &dyn ClipboardSource,
        recognizer: &dyn Recognizer,
        options: &RecognizeOptions,
    ) -> Result<Recognition, SessionError> {
        let result = pipeline::recognize_clipboard(clipboard, recognizer, options);
        self.record_recognition(result)
    }

    /// Append a finished recognition. Errors pass through untouched.
    ///
    /// The backend runs the pipeline off its event loop and lands the result
    /// here, so both paths share one way of growing the history.
    pub fn record_recognition(
        &mut self,
        result: Result<Recognition, SessionError>,
    ) -> Result<Recognition, SessionError> {
        let recognition = result?;
        self.record(recognition.text.clone());
        Ok(recognition)
    }

    pub fn record(&mut self, text: String) {
        self.history.push(text);
        tracing::debug!("History now holds {} entries", self.history.len());
    }

    pub fn replace_history(&mut self, entries: Vec<String>) {
        tracing::debug!(
            "Replacing {} history entries with {}",
            self.history.len(),
            entries.len()
        );
        self.history = entries;
    }

    /// Write the history as CSV; `None` means the user cancelled
    pub fn export(
        &self,
        path: Option<PathBuf>,
        header: &str,
    ) -> Result<ExportOutcome, SessionError> {
        let Some(path) = path else {
            return Ok(ExportOutcome::Cancelled);
        };

        let path = clipocr_io::with_csv_extension(path);
        clipocr_io::export_history(&path, header, &self.history)?;

        Ok(ExportOutcome::Written {
            path,
            entries: self.history.len(),
        })
    }

    /// Editor over a copy of the history; `commit` receives replacements
    pub fn open_history_editor<'a>(
        &self,
        commit: impl FnMut(Vec<String>) + 'a,
    ) -> HistoryEditor<'a> {
        HistoryEditor::new(&self.history, commit)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::sync::Mutex;

    use clipocr_io::ClipboardError;
    use clipocr_ocr::OcrError;
    use clipocr_types::{NoticeLevel, RawImage};

    use super::*;

    struct FixedClipboard(Option<RawImage>);

    impl ClipboardSource for FixedClipboard {
        fn image(&self) -> Result<Option<RawImage>, ClipboardError> {
            Ok(self.0.clone())
        }
    }

    /// Hands out queued results, one per call
    struct ScriptedRecognizer {
        results: Mutex<VecDeque<Result<String, OcrError>>>,
        calls: Mutex<Vec<(usize, String)>>,
    }

    impl ScriptedRecognizer {
        fn new(results: Vec<Result<String, OcrError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Recognizer for ScriptedRecognizer {
        fn recognize(&self, png: &[u8], language: &str) -> Result<String, OcrError> {
            self.calls
                .lock()
                .unwrap()
                .push((png.len(), language.to_string()));
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected recognize call")
        }
    }

    fn image() -> RawImage {
        RawImage::new(4, 2, vec![200; 4 * 2 * 4])
    }

    fn options() -> RecognizeOptions {
        RecognizeOptions {
            language: "chi_sim".to_string(),
            thumbnail_width: 300,
        }
    }

    fn engine_failure() -> OcrError {
        OcrError::Engine {
            status: "exit status: 1".to_string(),
            stderr: "Error opening data file".to_string(),
        }
    }

    #[test]
    fn test_no_image_is_a_warning_without_state_change() {
        let mut session = Session::new();
        session.record("kept".to_string());
        let recognizer = ScriptedRecognizer::new(vec![]);

        let err = session
            .recognize(&FixedClipboard(None), &recognizer, &options())
            .unwrap_err();

        assert!(matches!(err, SessionError::NoClipboardImage));
        assert_eq!(err.notice().level, NoticeLevel::Warning);
        assert_eq!(session.history(), ["kept"]);
        assert!(recognizer.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_recognize_appends_stripped_text() {
        let mut session = Session::new();
        let recognizer = ScriptedRecognizer::new(vec![Ok(" 你 好 世 界 \n\u{c}".to_string())]);

        let recognition = session
            .recognize(&FixedClipboard(Some(image())), &recognizer, &options())
            .unwrap();

        assert_eq!(recognition.text, "你好世界");
        assert_eq!(session.history(), ["你好世界"]);
        assert!(!session.history()[0].contains(' '));

        let calls = recognizer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, "chi_sim");
        assert!(calls[0].0 > 0);
    }

    #[test]
    fn test_recognize_produces_fixed_width_thumbnail() {
        let mut session = Session::new();
        let recognizer = ScriptedRecognizer::new(vec![Ok("字".to_string())]);

        let recognition = session
            .recognize(&FixedClipboard(Some(image())), &recognizer, &options())
            .unwrap();

        assert_eq!(recognition.thumbnail.width, 300);
        assert_eq!(recognition.thumbnail.height, 150);
    }

    #[test]
    fn test_engine_failure_leaves_history_untouched() {
        let mut session = Session::new();
        session.record("A".to_string());
        let recognizer = ScriptedRecognizer::new(vec![Err(engine_failure())]);

        let err = session
            .recognize(&FixedClipboard(Some(image())), &recognizer, &options())
            .unwrap_err();

        let notice = err.notice();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("Error opening data file"));
        assert_eq!(session.history(), ["A"]);
    }

    #[test]
    fn test_malformed_clipboard_image_is_an_error() {
        let mut session = Session::new();
        let recognizer = ScriptedRecognizer::new(vec![]);
        let broken = RawImage::new(10, 10, vec![0; 3]);

        let err = session
            .recognize(&FixedClipboard(Some(broken)), &recognizer, &options())
            .unwrap_err();

        assert!(matches!(
            err,
            SessionError::Recognition(OcrError::MalformedImage { .. })
        ));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_editor_save_replaces_history() {
        let session = Rc::new(RefCell::new(Session::new()));
        for entry in ["A", "B", "C"] {
            session.borrow_mut().record(entry.to_string());
        }

        let target = Rc::clone(&session);
        let mut editor = session
            .borrow()
            .open_history_editor(move |entries| target.borrow_mut().replace_history(entries));

        let second = editor.fields()[1].id;
        editor.edit_entry(second, "B'").unwrap();
        // editing alone does not touch the session
        assert_eq!(session.borrow().history(), ["A", "B", "C"]);

        editor.save();
        assert_eq!(session.borrow().history(), ["A", "B'", "C"]);
    }

    #[test]
    fn test_editor_delete_commits_before_save() {
        let session = Rc::new(RefCell::new(Session::new()));
        for entry in ["A", "B", "C"] {
            session.borrow_mut().record(entry.to_string());
        }

        let target = Rc::clone(&session);
        let mut editor = session
            .borrow()
            .open_history_editor(move |entries| target.borrow_mut().replace_history(entries));

        let second = editor.fields()[1].id;
        editor.delete_entry(second).unwrap();

        assert_eq!(session.borrow().history(), ["A", "C"]);
    }

    #[test]
    fn test_recognize_edit_delete_save_scenario() {
        let session = Rc::new(RefCell::new(Session::new()));
        let clipboard = FixedClipboard(Some(image()));
        let recognizer =
            ScriptedRecognizer::new(vec![Ok("你 好".to_string()), Ok("世 界".to_string())]);

        for _ in 0..2 {
            session
                .borrow_mut()
                .recognize(&clipboard, &recognizer, &options())
                .unwrap();
        }
        assert_eq!(session.borrow().history(), ["你好", "世界"]);

        let target = Rc::clone(&session);
        let mut editor = session
            .borrow()
            .open_history_editor(move |entries| target.borrow_mut().replace_history(entries));

        let first = editor.fields()[0].id;
        editor.delete_entry(first).unwrap();
        editor.save();

        assert_eq!(session.borrow().history(), ["世界"]);
    }

    #[test]
    fn test_export_cancelled_is_silent() {
        let mut session = Session::new();
        session.record("X".to_string());

        let outcome = session.export(None, "识别结果").unwrap();
        assert_eq!(outcome, ExportOutcome::Cancelled);
        assert!(outcome.notice().is_none());
    }

    #[test]
    fn test_export_writes_all_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        session.record("X".to_string());
        session.record("Y, with comma\nand newline".to_string());

        let outcome = session
            .export(Some(dir.path().join("history")), "识别结果")
            .unwrap();

        let path = dir.path().join("history.csv");
        assert_eq!(
            outcome,
            ExportOutcome::Written {
                path: path.clone(),
                entries: 2
            }
        );
        assert_eq!(outcome.notice().unwrap().level, NoticeLevel::Info);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "识别结果\nX\n\"Y, with comma\nand newline\"\n"
        );
    }

    #[test]
    fn test_export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new();

        let err = session
            .export(Some(dir.path().join("nope").join("h.csv")), "h")
            .unwrap_err();

        assert!(matches!(err, SessionError::Export(_)));
        assert_eq!(err.notice().level, NoticeLevel::Error);
    }

    #[test]
    fn test_clipboard_image_reads_current_contents() {
        let image = pipeline::clipboard_image(&FixedClipboard(Some(image()))).unwrap();
        assert_eq!((image.width, image.height), (4, 2));

        let err = pipeline::clipboard_image(&FixedClipboard(None)).unwrap_err();
        assert!(matches!(err, SessionError::NoClipboardImage));
    }

    #[test]
    fn test_record_recognition_from_worker() {
        let mut session = Session::new();
        let recognizer =
            ScriptedRecognizer::new(vec![Ok("甲 乙".to_string()), Err(engine_failure())]);
        let clipboard = FixedClipboard(Some(image()));

        // as the backend does it: pipeline elsewhere, result recorded here
        let first = pipeline::recognize_clipboard(&clipboard, &recognizer, &options());
        let recognition = session.record_recognition(first).unwrap();
        assert_eq!(recognition.text, "甲乙");
        assert_eq!(session.history(), ["甲乙"]);

        let second = pipeline::recognize_clipboard(&clipboard, &recognizer, &options());
        let err = session.record_recognition(second).unwrap_err();
        assert!(matches!(err, SessionError::Recognition(_)));
        assert_eq!(session.history(), ["甲乙"]);

        let err = session
            .record_recognition(Err(SessionError::NoClipboardImage))
            .unwrap_err();
        assert_eq!(err.notice().level, NoticeLevel::Warning);
        assert_eq!(session.history(), ["甲乙"]);
    }
}
