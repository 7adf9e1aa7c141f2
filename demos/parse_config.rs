//! Driving the lexer over definition-style text.
//!
//! Run with: `cargo run --example parse_config`

use infolex::{compress, Lexer, Result};

const WEAPONS: &str = r#"
// weapon definitions
/* edit with care: these feed the spawn system */

weapon "rocket launcher" {
    damage    100
    speed     900
    splash    ( 120 1.0 )
}

weapon shotgun {
    damage    10
    pellets   11
}
"#;

fn main() -> Result<()> {
    let mut lexer = Lexer::new(WEAPONS, "weapons.def");

    loop {
        let token = lexer.token();
        if token.is_empty() {
            break;
        }
        println!("line {:>2}: weapon '{}'", token.line(), lexer.token());

        // each definition body is brace-delimited
        lexer.match_token("{")?;
        loop {
            let field = lexer.next_token(true);
            if field.is_empty() || field == "}" {
                break;
            }
            if field == "splash" {
                let row = lexer.parse_matrix1(2)?;
                println!("         splash = {:?}", row);
            } else {
                println!("         {} = {}", field, lexer.token());
            }
        }
    }

    println!("\ncompressed:\n{}", compress(WEAPONS));
    Ok(())
}
