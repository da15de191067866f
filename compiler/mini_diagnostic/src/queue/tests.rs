use super::*;

fn line(n: u32) -> Line {
    Line::new(n)
}

#[test]
fn every_report_increments_the_counter_once() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());

    queue.report(Diagnostic::semantic(line(1), "a"));
    queue.report(Diagnostic::semantic(line(1), "a"));
    queue.error(ErrorKind::Syntax, line(2), "b");

    assert_eq!(queue.error_count(), 3);
    assert!(queue.has_errors().is_some());
    assert_eq!(queue.count_of(ErrorKind::Semantic), 2);
    assert_eq!(queue.count_of(ErrorKind::Syntax), 1);
}

#[test]
fn limit_caps_storage_but_not_counting() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::with_limit(2));
    for n in 1..=5 {
        queue.report(Diagnostic::lexical(line(n), "unrecognized symbol"));
    }
    assert_eq!(queue.error_count(), 5);
    assert_eq!(queue.peek().count(), 2);
}

#[test]
fn flush_orders_by_line_and_keeps_report_order_within_a_line() {
    let mut queue = DiagnosticQueue::new();
    queue.report(Diagnostic::semantic(line(9), "late"));
    queue.report(Diagnostic::lexical(line(3), "first on 3"));
    queue.report(Diagnostic::syntax(line(3), "second on 3"));

    let flushed = queue.flush();
    let messages: Vec<&str> = flushed.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, ["first on 3", "second on 3", "late"]);
    assert_eq!(queue.peek().count(), 0);
    assert_eq!(queue.error_count(), 3);
}
