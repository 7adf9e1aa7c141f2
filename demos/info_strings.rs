//! Building and editing info strings.
//!
//! Run with: `cargo run --example info_strings`

use infolex::{info, infomap, InfoLimit, InfoMap, Result};

fn main() -> Result<()> {
    // a user's display attributes, edited in place
    let mut user = String::new();
    info::set_value(&mut user, "name", "Dave")?;
    info::set_value(&mut user, "model", "ranger")?;
    info::set_value(&mut user, "score", "10")?;
    println!("wire:    {user}");

    // lookups fold case
    println!("score:   {:?}", info::value_for_key(&user, "SCORE"));

    // updating moves the pair to the end; empty value deletes
    info::set_value(&mut user, "score", "15")?;
    info::set_value(&mut user, "model", "")?;
    println!("edited:  {user}");

    for (key, value) in info::pairs(&user) {
        println!("  {key} = {value}");
    }

    // structured view for bulk edits
    let mut map = InfoMap::parse(&user);
    map.insert("team".to_string(), "red".to_string());
    println!("re-encoded: {}", map.encode(InfoLimit::Standard)?);

    // invalid content is rejected, the buffer stays intact
    match info::set_value(&mut user, "bad;key", "value") {
        Err(err) => println!("rejected: {err}"),
        Ok(()) => unreachable!(),
    }

    // the macro builds a map literal
    let defaults = infomap! { "name" => "UnnamedPlayer", "rate" => 25000 };
    println!("defaults: {}", defaults.encode(InfoLimit::Standard)?);

    Ok(())
}
