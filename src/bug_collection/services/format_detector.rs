use super::xml_walker::{path_matches, walk, Flow, XmlNode};
use crate::shared::Result;
use std::io::{BufReader, Read};

/// Element path that only occurs in Maven FindBugs plug-in reports
pub const WRAPPED_WARNING_PATH: [&str; 3] = ["BugCollection", "file", "BugInstance"];

/// FormatDetector service for classifying FindBugs reports
///
/// Native FindBugs reports place `BugInstance` directly below the
/// `BugCollection` root; the Maven plug-in nests it one level deeper under a
/// `file` element. Both formats share the element names, so the detector
/// matches on the full element path and stops at the first hit.
pub struct FormatDetector;

impl FormatDetector {
    /// Returns `true` if the report is in the Maven plug-in (wrapped) format
    ///
    /// # Arguments
    /// * `reader` - A fresh stream positioned at the start of the report
    /// * `source_name` - Name used in error messages
    ///
    /// # Errors
    /// Returns `ReportError::MalformedReport` if invalid markup is found before
    /// the classification is known, and `ReportError::ReportUnavailable` if the
    /// stream cannot be read.
    pub fn is_wrapped<R: Read>(reader: R, source_name: &str) -> Result<bool> {
        let mut wrapped = false;
        walk(BufReader::new(reader), source_name, |node| {
            if let XmlNode::Open { path, .. } = node {
                if path_matches(path, &WRAPPED_WARNING_PATH) {
                    wrapped = true;
                    return Ok(Flow::Stop);
                }
            }
            Ok(Flow::Continue)
        })?;

        tracing::debug!(source = source_name, wrapped, "Classified FindBugs report");
        Ok(wrapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ReportError;

    const NATIVE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<BugCollection version="1.3.9" sequence="0" timestamp="1220000000000">
  <Project projectName="core"/>
  <BugInstance type="NP_NULL_ON_SOME_PATH" priority="1" category="CORRECTNESS">
    <Class classname="com.acme.Parser">
      <SourceLine classname="com.acme.Parser" start="10" end="90"/>
    </Class>
  </BugInstance>
</BugCollection>"#;

    const WRAPPED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<BugCollection version="1.3.9" threshold="Low" effort="Default">
  <file classname="com.acme.Parser">
    <BugInstance type="DM_STRING_CTOR" priority="Normal" category="PERFORMANCE" lineNumber="42"/>
  </file>
</BugCollection>"#;

    #[test]
    fn test_native_report_is_not_wrapped() {
        assert!(!FormatDetector::is_wrapped(NATIVE.as_bytes(), "native.xml").unwrap());
    }

    #[test]
    fn test_wrapped_report_is_wrapped() {
        assert!(FormatDetector::is_wrapped(WRAPPED.as_bytes(), "wrapped.xml").unwrap());
    }

    #[test]
    fn test_file_element_without_bug_instance_is_native() {
        let xml = r#"<BugCollection><file classname="a.B"/></BugCollection>"#;
        assert!(!FormatDetector::is_wrapped(xml.as_bytes(), "x.xml").unwrap());
    }

    #[test]
    fn test_bug_instance_under_file_at_wrong_depth_is_native() {
        let xml = r#"<Report><BugCollection><file><BugInstance type="X"/></file></BugCollection></Report>"#;
        assert!(!FormatDetector::is_wrapped(xml.as_bytes(), "x.xml").unwrap());
    }

    #[test]
    fn test_detection_stops_at_first_match() {
        // Everything after the first wrapped bug instance is never read
        let xml = r#"<BugCollection><file><BugInstance type="X"/></file><broken></BugCollection>"#;
        assert!(FormatDetector::is_wrapped(xml.as_bytes(), "x.xml").unwrap());
    }

    #[test]
    fn test_input_without_document_element_is_rejected() {
        for xml in ["", "   \n", "<?xml version=\"1.0\" encoding=\"UTF-8\"?>"] {
            let err = FormatDetector::is_wrapped(xml.as_bytes(), "empty.xml").unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ReportError>(),
                Some(ReportError::MalformedReport { .. })
            ));
        }
    }

    #[test]
    fn test_latin1_wrapped_report_is_detected() {
        let mut xml = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n".to_vec();
        xml.extend_from_slice(b"<BugCollection><file classname=\"a.B\"><BugInstance type=\"X\" message=\"caf\xE9\"/></file></BugCollection>");
        assert!(FormatDetector::is_wrapped(xml.as_slice(), "latin1.xml").unwrap());
    }

    #[test]
    fn test_malformed_report_is_an_error() {
        let result = FormatDetector::is_wrapped("<BugCollection><BugInstance>".as_bytes(), "bad.xml");
        let err = result.unwrap_err();
        match err.downcast_ref::<ReportError>() {
            Some(ReportError::MalformedReport { source_name, .. }) => {
                assert_eq!(source_name, "bad.xml")
            }
            other => panic!("expected MalformedReport, got {:?}", other),
        }
    }
}
