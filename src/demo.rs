use crate::linkedlist::{destroy, render, reverse, NodeFactory};
use crate::parse::parse;
use anyhow::{Context, Result};
use bumpalo::Bump;
use std::io::Write;
use tracing::info;

/*
 * Run the five demonstration cases, writing the transcript to <out>.
 * Every case owns its arena : the storage of a case is released
 * before the next one starts.
 */
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Singly linked list reversal ===\n")?;

    single_reversal(out, "Test 1: empty list", "").context("Test 1 failed")?;
    single_reversal(out, "Test 2: single node", "1").context("Test 2 failed")?;
    five_nodes(out).context("Test 3 failed")?;
    single_reversal(out, "Test 4: two nodes (10 -> 20)", "10 -> 20")
        .context("Test 4 failed")?;
    double_reversal(out).context("Test 5 failed")?;

    writeln!(out, "All tests completed!")?;
    info!("demonstration finished");
    Ok(())
}

fn single_reversal<W: Write>(out: &mut W, title: &str, input: &str) -> Result<()> {
    let bump = Bump::new();
    let factory = NodeFactory::new(&bump);
    let head = parse(&factory, input)?;

    writeln!(out, "{}", title)?;
    write!(out, "Before: {}", render(head))?;
    let head = reverse(head);
    write!(out, "After: {}", render(head))?;
    destroy(head);
    writeln!(out)?;
    Ok(())
}

/*
 * Chained by hand, one node at a time
 */
fn five_nodes<W: Write>(out: &mut W) -> Result<()> {
    let bump = Bump::new();
    let factory = NodeFactory::new(&bump);

    let head = factory.create(1)?;
    let mut tail = head;
    for value in 2..=5 {
        let node = factory.create(value)?;
        tail.set_next(Some(node));
        tail = node;
    }
    let head = Some(head);

    writeln!(out, "Test 3: several nodes (1 -> 2 -> 3 -> 4 -> 5)")?;
    write!(out, "Before: {}", render(head))?;
    let head = reverse(head);
    write!(out, "After: {}", render(head))?;
    destroy(head);
    writeln!(out)?;
    Ok(())
}

fn double_reversal<W: Write>(out: &mut W) -> Result<()> {
    let bump = Bump::new();
    let factory = NodeFactory::new(&bump);
    let head = parse(&factory, "1 -> 2 -> 3")?;

    writeln!(out, "Test 5: double reversal (1 -> 2 -> 3)")?;
    write!(out, "Original: {}", render(head))?;
    let head = reverse(head);
    write!(out, "First reversal: {}", render(head))?;
    let head = reverse(head);
    write!(out, "Second reversal: {}", render(head))?;
    destroy(head);
    writeln!(out)?;
    Ok(())
}
