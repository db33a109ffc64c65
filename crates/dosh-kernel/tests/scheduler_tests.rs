//! Process scheduling as seen through the kernel, one line per iteration.

use dosh_kernel::tools::ToolArgs;
use dosh_kernel::{Kernel, KernelConfig, ProcessId, ProcessState};
use dosh_testutil::TestRoot;

fn kernel() -> (TestRoot, Kernel) {
    let root = TestRoot::new();
    root.drive("internal", "A");
    let kernel = Kernel::new(KernelConfig::default().with_root(root.path())).unwrap();
    (root, kernel)
}

#[tokio::test]
async fn countdown_runs_to_completion() {
    let (_root, mut k) = kernel();

    let r = k.handle_line("countdown 2 &").await;
    assert_eq!(r.out, "[0] Process 'countdown' started.\n[0] countdown: 2");
    assert!(k.prompt().starts_with("dosh A:"));

    let r = k.handle_line("").await;
    assert_eq!(r.out, "[0] countdown: 1\n[0] Process 'countdown' terminated.");
    assert_eq!(k.processes().state(ProcessId(0)), Some(ProcessState::Terminated));

    // Terminated processes are never stepped again
    assert_eq!(k.handle_line("").await.out, "");
}

#[tokio::test]
async fn background_processes_step_in_creation_order() {
    let (_root, mut k) = kernel();
    k.handle_line("countdown 5 &").await;
    k.handle_line("countdown 5 &").await;

    let r = k.handle_line("echo tick").await;
    assert_eq!(r.out, "tick\n[0] countdown: 3\n[1] countdown: 4");
}

#[tokio::test]
async fn editor_holds_input_while_background_work_continues() {
    let (_root, mut k) = kernel();
    k.handle_line("countdown 3 &").await;

    let r = k.handle_line("edit notes.txt").await;
    assert!(r.out.contains("[1] Process 'edit' started."));
    assert!(k.awaiting_input());
    assert_eq!(k.prompt(), "");
    assert_eq!(k.processes().foreground(), Some(ProcessId(1)));

    // Lines go to the editor, not the dispatcher, and countdown keeps ticking
    let r = k.handle_line("dir").await;
    assert_eq!(r.out, "[0] countdown: 1\n[0] Process 'countdown' terminated.");

    let r = k.handle_line(":wq").await;
    assert!(r.out.contains("File 'notes.txt' saved successfully."));
    assert!(r.out.ends_with("[1] Process 'edit' terminated."));
    assert!(!k.awaiting_input());
    assert_eq!(k.vfs().read("A:/notes.txt").await.unwrap(), "dir");
}

#[tokio::test]
async fn new_foreground_process_takes_input_from_the_old_one() {
    let (_root, mut k) = kernel();
    k.handle_line("edit a.txt").await;
    assert_eq!(k.processes().awaiting_input(), Some(ProcessId(0)));

    let b = k.spawn_app("edit", &ToolArgs::from_words(["b.txt"]), false).unwrap();
    assert_eq!(k.processes().foreground(), Some(b));
    k.handle_line("").await;
    assert_eq!(k.processes().awaiting_input(), Some(b));

    k.handle_line("for b").await;
    let r = k.handle_line(":wq").await;
    assert!(r.out.contains("File 'b.txt' saved successfully."));
    assert_eq!(k.vfs().read("A:/b.txt").await.unwrap(), "for b");

    // The old editor never saw those lines and still waits
    assert_eq!(k.processes().state(ProcessId(0)), Some(ProcessState::WaitingForInput));
    assert!(k.vfs().read("A:/a.txt").await.is_err());
}

#[tokio::test]
async fn editor_cannot_run_in_background() {
    let (_root, mut k) = kernel();
    let r = k.handle_line("edit x.txt &").await;
    assert!(!r.ok());
    assert_eq!(r.err, "Error: application 'edit' cannot be run in the background");
    assert!(k.processes().list().is_empty());
}

#[tokio::test]
async fn fault_terminates_only_the_faulting_process() {
    let (_root, mut k) = kernel();
    k.handle_line("countdown 4 &").await;

    let r = k.handle_line("countdown soon &").await;
    assert_eq!(r.err, "[1] Error in process 'countdown': invalid count: 'soon'");
    assert!(!r.out.contains("[1] Process 'countdown' terminated."));
    assert_eq!(k.processes().state(ProcessId(1)), Some(ProcessState::Terminated));

    let r = k.handle_line("").await;
    assert_eq!(r.out, "[0] countdown: 2");
    assert_eq!(k.processes().state(ProcessId(0)), Some(ProcessState::Running));
}

#[tokio::test]
async fn ps_and_fg() {
    let (_root, mut k) = kernel();
    k.handle_line("countdown 9 &").await;

    let r = k.handle_line("tasks").await;
    assert!(r.out.contains("countdown"));
    assert!(!r.out.contains('*'));

    let r = k.handle_line("fg 0").await;
    assert!(r.out.starts_with("[0] countdown is now in the foreground"));
    assert_eq!(k.processes().foreground(), Some(ProcessId(0)));

    let r = k.handle_line("fg 7").await;
    assert!(r.err.starts_with("fg: no such running process: 7"));
}

#[tokio::test]
async fn ids_are_never_reused() {
    let (_root, mut k) = kernel();
    k.handle_line("countdown 1 &").await;
    k.handle_line("countdown 1 &").await;
    let ids: Vec<_> = k.processes().list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![ProcessId(0), ProcessId(1)]);
    assert_eq!(k.processes().live_count(), 0);
}
