//! StringList walkthrough: positional edits and the running average.
//!
//! Run with: cargo run --example report

use strlist::StringList;
use strlist_average::average;

fn main() {
    println!("=== StringList: scores ===\n");

    let mut scores: StringList = ["70", "85", "90"].into_iter().collect();
    println!("initial:        {:?}", scores.to_vec());
    println!("average:        {}", average(&scores));

    scores.push("100");
    scores.unshift("55");
    println!("\nafter push/unshift: {:?}", scores.to_vec());
    println!("average:            {}", average(&scores));

    if let Ok(dropped) = scores.remove_at(0) {
        println!("\ndropped lowest:  {dropped}");
    }
    println!("remaining:       {:?}", scores.to_vec());
    println!("average:         {}", average(&scores));

    // Out-of-range access fails fast with a descriptive error.
    match scores.get_at(99) {
        Ok(val) => println!("unexpected: {val}"),
        Err(err) => println!("\nget_at(99):      {err}"),
    }
}
