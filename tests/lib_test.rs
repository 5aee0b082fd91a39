//! Library integration tests.

use patchbench::PatchbenchError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = PatchbenchError::CsvError {
        path: "instances.csv".into(),
        message: "bad row".into(),
    };
    assert!(err.to_string().contains("instances.csv"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> patchbench::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use patchbench::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["patchbench", "list", "--json"]);

    if let Some(Commands::List(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn records_render_from_disk() {
    use patchbench::records::RecordSet;
    use patchbench::report::Report;

    let temp = TempDir::new().unwrap();
    let tasks = temp.path().join("tasks");
    fs::create_dir_all(&tasks).unwrap();
    fs::write(tasks.join("b.yml"), "id: second\n").unwrap();
    fs::write(tasks.join("a.yml"), "id: first\nstatus:\n  human: MERGED\n").unwrap();
    fs::write(tasks.join("notes.txt"), "not a task").unwrap();

    let records = RecordSet::load(temp.path()).unwrap();
    let report = Report::from_records(&records);

    let ids: Vec<_> = report.tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["first", "second"]);
    assert_eq!(report.tasks[1].human, "PENDING");
    assert!(report.results.is_empty());

    let html = report.render_fragment().unwrap();
    assert!(html.contains("<td>MERGED</td>"));
    assert!(html.contains("No results yet."));
}
