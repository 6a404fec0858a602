//! Render payment buttons into an in-memory document and print the result.
//!
//! Run with: cargo run -p paybutton --example render_button -- [language] [config.json]
//!
//! Set `RUST_LOG=paybutton=debug` to see injection and locale decisions.

use std::cell::Cell;
use std::rc::Rc;

use paybutton::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("paybutton=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let language = args.next().or_else(SystemLocale::current);
    let style = match args.next() {
        Some(path) => StyleOptions::from_json(&std::fs::read_to_string(path)?)?,
        None => StyleOptions::default(),
    };

    let document = MemoryDocument::new();
    document.set_preferred_language(language.as_deref());
    let mut builder = ButtonBuilder::new(document);

    let clicks = Rc::new(Cell::new(0u32));
    let counter = clicks.clone();
    let options =
        ButtonOptions::from_style(style).on_click(move || counter.set(counter.get() + 1));
    let container = builder.build(options)?;
    let button = container.children()[0].clone();

    println!("<!-- preferred language: {} -->", language.as_deref().unwrap_or("(none)"));
    for css in builder.document().injected_styles() {
        println!("<style>{css}</style>");
    }
    println!("{}", container.to_html());

    button.dispatch(EventKind::PointerEnter);
    println!("<!-- hovered: {} -->", button.attribute("class").unwrap_or_default());
    button.dispatch(EventKind::Click);
    println!("<!-- clicks: {} -->", clicks.get());

    Ok(())
}
