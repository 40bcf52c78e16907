/// Integration tests for the application layer
mod test_utilities;

use findbugs_ingest::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tempfile::TempDir;
use test_utilities::mocks::*;

const MODULE_A: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<BugCollection version="1.3.9">
  <BugInstance type="NP_NULL_ON_SOME_PATH" priority="1" category="CORRECTNESS">
    <LongMessage>Possible null pointer dereference</LongMessage>
    <Class classname="com.acme.a.Service">
      <SourceLine classname="com.acme.a.Service" start="5" end="80" sourcepath="com/acme/a/Service.java"/>
    </Class>
    <SourceLine classname="com.acme.a.Service" start="21" end="21"/>
  </BugInstance>
</BugCollection>
"#;

const MODULE_B: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<BugCollection version="1.3.9" threshold="Low" effort="Max">
  <file classname="com.acme.b.Handler">
    <BugInstance type="DM_STRING_CTOR" priority="Normal" category="PERFORMANCE" message="Inefficient String constructor" lineNumber="17"/>
  </file>
</BugCollection>
"#;

fn fixture_results() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/results")
}

fn fixture_workspace() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/workspace")
}

/// Copies the report fixtures into a scratch results directory
fn scratch_results() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in ["core.xml", "web.xml", "empty.xml"] {
        fs::copy(fixture_results().join(name), dir.path().join(name)).unwrap();
    }
    dir
}

fn collect(results_dir: &Path) -> Project {
    CollectReportsUseCase::new(FileSystemReportSource::new(), MockProgressReporter::new())
        .execute(&CollectRequest::new(results_dir.to_path_buf()))
        .unwrap()
}

fn files_by_key(project: &Project) -> Vec<(String, Option<String>)> {
    project
        .warnings()
        .map(|w| (w.qualified_name(), w.file().map(str::to_string)))
        .collect()
}

#[test]
fn test_schema_flag_matches_report_format() {
    let project = collect(&fixture_results());

    let flags: Vec<(&str, bool)> = project
        .modules()
        .iter()
        .map(|m| (m.name(), m.is_wrapped_schema()))
        .collect();
    assert_eq!(
        flags,
        vec![("core", false), ("empty", false), ("web", true)]
    );
}

#[test]
fn test_detection_is_schema_pure() {
    for (name, wrapped) in [("core.xml", false), ("web.xml", true), ("empty.xml", false)] {
        let file = fs::File::open(fixture_results().join(name)).unwrap();
        assert_eq!(FormatDetector::is_wrapped(file, name).unwrap(), wrapped, "{}", name);
    }
}

#[test]
fn test_native_fixture_model() {
    let project = collect(&fixture_results());
    let core = project.module("core").unwrap();

    assert_eq!(core.version(), Some("1.3.9"));
    let class_names: Vec<&str> = core.classes().iter().map(|c| c.class_name()).collect();
    assert_eq!(class_names, vec!["com.acme.Parser", "com.acme.Parser$Token"]);

    let keys: Vec<String> = core.all_warnings().map(|w| w.qualified_name()).collect();
    assert_eq!(
        keys,
        vec![
            ":SE_BAD_FIELD:",
            "com.acme.Parser:NP_NULL_ON_SOME_PATH:33",
            "com.acme.Parser$Token:SIC_INNER_SHOULD_BE_STATIC:95",
        ]
    );
    assert_eq!(
        core.warnings()[0].message(),
        "Non-transient non-serializable instance field"
    );
}

#[test]
fn test_wrapped_fixture_model() {
    let project = collect(&fixture_results());
    let web = project.module("web").unwrap();

    assert_eq!(web.threshold(), Some("Low"));
    assert_eq!(web.effort(), Some("Default"));
    assert_eq!(web.classes().len(), 2);
    assert!(web.warnings().is_empty());

    let handler = &web.classes()[0];
    assert_eq!(handler.class_name(), "com.acme.web.Handler");
    let lines: Vec<Option<u32>> = handler.warnings().iter().map(|w| w.line()).collect();
    assert_eq!(lines, vec![Some(42), Some(57)]);
    assert_eq!(handler.warnings()[1].priority(), "High");
}

#[test]
fn test_empty_envelope_yields_unknown_format_module() {
    let project = collect(&fixture_results());
    let empty = project.module("empty").unwrap();

    assert!(empty.classes().is_empty());
    assert!(empty.warnings().is_empty());
    assert_eq!(empty.warning_count(), 0);
}

#[test]
fn test_end_to_end_two_modules() {
    let results = TempDir::new().unwrap();
    fs::write(results.path().join("moduleA.xml"), MODULE_A).unwrap();
    fs::write(results.path().join("moduleB.xml"), MODULE_B).unwrap();

    let project = collect(results.path());

    assert_eq!(project.module_count(), 2);
    let a = project.module("moduleA").unwrap();
    let b = project.module("moduleB").unwrap();
    assert!(!a.is_wrapped_schema());
    assert!(b.is_wrapped_schema());
    assert_eq!(a.warning_count() + b.warning_count(), 2);
    assert_eq!(project.warning_count(), 2);

    let keys: Vec<String> = project.warnings().map(|w| w.qualified_name()).collect();
    assert_eq!(
        keys,
        vec![
            "com.acme.a.Service:NP_NULL_ON_SOME_PATH:21",
            "com.acme.b.Handler:DM_STRING_CTOR:17",
        ]
    );
}

#[test]
fn test_persist_and_restore_with_real_store() {
    let results = scratch_results();
    let mapper = MapWarningsUseCase::new(FileSystemMappingStore::new());

    let mut project = collect(results.path());
    let mapping = mapper
        .map_and_persist(
            &SourceTreeResolver::new(fixture_workspace()),
            results.path(),
            &mut project,
        )
        .unwrap();
    assert_eq!(mapping.len(), 4);
    assert!(results.path().join("file-mapping.properties").is_file());

    let mut restored = collect(results.path());
    let applied = mapper.restore(results.path(), &mut restored).unwrap();

    assert_eq!(applied, 4);
    assert_eq!(files_by_key(&restored), files_by_key(&project));
    assert_eq!(
        restored
            .module("core")
            .unwrap()
            .classes()[1]
            .warnings()[0]
            .file(),
        Some("core/src/main/java/com/acme/Parser.java")
    );
    let unknown = &restored.module("web").unwrap().classes()[1];
    assert_eq!(unknown.warnings()[0].file(), None);
}

#[test]
fn test_restore_without_mapping_file_is_noop() {
    let results = scratch_results();
    let mapper = MapWarningsUseCase::new(FileSystemMappingStore::new());

    let mut project = collect(results.path());
    let applied = mapper.restore(results.path(), &mut project).unwrap();

    assert_eq!(applied, 0);
    assert!(project.warnings().all(|w| w.file().is_none()));
}

#[test]
fn test_colliding_keys_keep_last_write() {
    let report = r#"<BugCollection>
  <file classname="com.acme.Dup">
    <BugInstance type="NP_NULL" lineNumber="3" message="first"/>
  </file>
  <file classname="com.acme.Dup">
    <BugInstance type="NP_NULL" lineNumber="3" message="second"/>
  </file>
</BugCollection>"#;
    let source = MockReportSource::new().with_report("dup.xml", report);
    let mut project = CollectReportsUseCase::new(source, MockProgressReporter::new())
        .execute(&CollectRequest::new(PathBuf::from("results")))
        .unwrap();
    assert_eq!(project.warning_count(), 2);

    // Give each warning a distinct file so the survivor is visible
    for (index, warning) in project.warnings_mut().enumerate() {
        warning.set_file(Some(format!("src/Dup{}.java", index)));
    }

    let mapping = FileMapping::from_project(&project);
    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.get("com.acme.Dup:NP_NULL:3"), Some("src/Dup1.java"));
}

#[test]
fn test_failed_store_leaves_no_partial_mapping() {
    let results = scratch_results();
    // A directory where the mapping file should go makes the final rename fail
    fs::create_dir(results.path().join("file-mapping.properties")).unwrap();
    let before: Vec<_> = fs::read_dir(results.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();

    let mapper = MapWarningsUseCase::new(FileSystemMappingStore::new());
    let mut project = collect(results.path());
    let err = mapper
        .map_and_persist(
            &SourceTreeResolver::new(fixture_workspace()),
            results.path(),
            &mut project,
        )
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::MappingPersistence { .. })
    ));
    let mut after: Vec<_> = fs::read_dir(results.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    let mut before = before;
    before.sort();
    after.sort();
    assert_eq!(before, after);
    assert!(results.path().join("file-mapping.properties").is_dir());
}

#[test]
fn test_first_malformed_report_is_surfaced() {
    let source = MockReportSource::new()
        .with_report("a.xml", MODULE_A)
        .with_report("b.xml", "<BugCollection><file>")
        .with_report("c.xml", "<BugCollection></Broken>");
    let reporter = MockProgressReporter::new();
    let use_case = CollectReportsUseCase::new(source.clone(), reporter.clone());

    let err = use_case
        .execute(&CollectRequest::new(PathBuf::from("results")))
        .unwrap_err();

    assert!(format!("{}", err).contains("b.xml"));
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::MalformedReport { .. })
    ));
    // a.xml twice, b.xml once (detection fails on the first pass)
    assert_eq!(source.open_count(), 3);
    assert_eq!(
        reporter.messages().last().map(String::as_str),
        Some("error: ❌ Failed to read b.xml")
    );
}

#[test]
fn test_cancelled_before_run_opens_nothing() {
    let source = MockReportSource::new().with_report("a.xml", MODULE_A);
    let use_case = CollectReportsUseCase::new(source.clone(), MockProgressReporter::new());

    let request = CollectRequest::new(PathBuf::from("results"))
        .with_cancel_flag(Arc::new(AtomicBool::new(true)));
    let err = use_case.execute(&request).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::Interrupted)
    ));
    assert_eq!(source.open_count(), 0);
}

#[test]
fn test_progress_is_reported_per_report() {
    let reporter = MockProgressReporter::new();
    let source = MockReportSource::new()
        .with_report("moduleA.xml", MODULE_A)
        .with_report("moduleB.xml", MODULE_B);

    CollectReportsUseCase::new(source, reporter.clone())
        .execute(&CollectRequest::new(PathBuf::from("results")))
        .unwrap();

    let messages = reporter.messages();
    assert!(messages[0].contains("Found 2 FindBugs report(s)"));
    assert_eq!(messages[1], "1/2 moduleA.xml");
    assert_eq!(messages[2], "2/2 moduleB.xml");
    assert!(messages[3].starts_with("done: "));
}

#[test]
fn test_source_tree_resolver_maps_inner_class() {
    let workspace = TempDir::new().unwrap();
    let java = workspace.path().join("src/main/java/com/acme");
    fs::create_dir_all(&java).unwrap();
    fs::write(java.join("Foo.java"), "package com.acme;").unwrap();

    let mut class = JavaClass::new("com.acme.Foo$Bar");
    class.add_warning(Warning::new("SIC_INNER_SHOULD_BE_STATIC").with_line(7));
    let mut module = Module::new("core");
    module.add_class(class);
    let mut project = Project::new();
    project.add_module(module);

    SourceTreeResolver::new(workspace.path())
        .resolve(&mut project)
        .unwrap();

    assert_eq!(
        project.warnings().next().and_then(|w| w.file()),
        Some("src/main/java/com/acme/Foo.java")
    );
}

#[test]
fn test_mapping_with_mock_store_and_resolver() {
    let store = MockMappingStore::new();
    let mapper = MapWarningsUseCase::new(store.clone());
    let resolver = MockWorkspaceResolver::new()
        .with_file("com.acme.b.Handler", "b/src/main/java/com/acme/b/Handler.java");
    let source = MockReportSource::new().with_report("moduleB.xml", MODULE_B);
    let collect = CollectReportsUseCase::new(source, MockProgressReporter::new());
    let results_dir = PathBuf::from("results");

    let mut project = collect.execute(&CollectRequest::new(results_dir.clone())).unwrap();
    mapper
        .map_and_persist(&resolver, &results_dir, &mut project)
        .unwrap();

    let stored = store.stored(&results_dir).unwrap();
    assert_eq!(
        stored.get("com.acme.b.Handler:DM_STRING_CTOR:17"),
        Some("b/src/main/java/com/acme/b/Handler.java")
    );
}

#[test]
fn test_build_currency() {
    let use_case =
        CheckCurrentBuildUseCase::new(MockBuildHistory::new().with_latest("acme-core", 128));

    assert!(use_case.is_current(&BuildIdentity::new("acme-core", 128)).unwrap());
    assert!(!use_case.is_current(&BuildIdentity::new("acme-core", 127)).unwrap());
    assert!(use_case.is_current(&BuildIdentity::new("other", 1)).is_err());
}
