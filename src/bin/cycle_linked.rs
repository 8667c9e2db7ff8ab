//! Finds where the cycle starts in the chain `1 -> 2 -> 3 -> 4 -> 5 -> 3`.

use std::process::ExitCode;

use cycle_finder::cycle::{canonical_example, find_cycle_floyd, find_cycle_set, LinkedArena, NodeId};

fn describe(list: &LinkedArena<i32>, found: Option<NodeId>) -> String {
    match found.and_then(|id| list.node(id)) {
        Some(node) => node.to_string(),
        None => "None".to_owned(),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let (list, head) = canonical_example();

    let c = find_cycle_set(&list, head);
    println!("Node where the cycle started (set): {}", describe(&list, c));

    let c = find_cycle_floyd(&list, head);
    println!("Node where the cycle started (floyd): {}", describe(&list, c));

    if c.is_some() {
        ExitCode::SUCCESS
    } else {
        log::error!("no cycle found in the demonstration chain");
        ExitCode::FAILURE
    }
}
