//! Subcommand implementations. Each returns the JSON the binary prints.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use blocks::{BlockId, BlockKind, registry};
use canvas::config::CanvasConfig;
use canvas::container::{Callbacks, Canvas};
use inspector::{Control, ControlEvent, Widget, inspect, patch_for};
use serde_json::{Value, json};
use tracing::info;

use crate::deck::Deck;
use crate::error::CliError;

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub deck: PathBuf,
    pub config: CanvasConfig,
}

fn kind_of(tag: &str) -> Result<BlockKind, CliError> {
    BlockKind::from_tag(tag).ok_or_else(|| CliError::UnknownType(tag.to_owned()))
}

/// Every registered type with its label and category.
#[must_use]
pub fn types() -> Value {
    registry::all()
        .into_iter()
        .map(|m| json!({ "type": m.kind.tag(), "label": m.label, "category": m.category }))
        .collect()
}

/// The registry entry for one type.
pub fn schema(tag: &str) -> Result<Value, CliError> {
    let kind = kind_of(tag)?;
    let meta = registry::meta(kind).ok_or_else(|| CliError::UnknownType(tag.to_owned()))?;
    Ok(serde_json::to_value(meta)?)
}

/// Drop a new block from the palette into the deck.
pub fn new_block(ctx: &Context, tag: &str, at: Option<(f64, f64)>) -> Result<Value, CliError> {
    let kind = kind_of(tag)?;
    let mut deck = Deck::load(&ctx.deck)?;
    let mut store = deck.store();
    let id = store.create(kind, at);
    deck.sync(&store);
    deck.save(&ctx.deck)?;
    info!(%id, tag, "block created");
    Ok(serde_json::to_value(store.get(&id))?)
}

/// The read-only canvas view of the whole deck.
pub fn render(ctx: &Context) -> Result<Value, CliError> {
    let deck = Deck::load(&ctx.deck)?;
    let store = deck.store();
    let mut canvas = Canvas::new(ctx.config, deck.theme, Callbacks::default());
    canvas.set_comments(deck.comments);
    Ok(serde_json::to_value(canvas.render(&store))?)
}

/// The inspector panel for one block.
pub fn inspect_block(ctx: &Context, id: BlockId) -> Result<Value, CliError> {
    let deck = Deck::load(&ctx.deck)?;
    let store = deck.store();
    let block = store.get(&id).ok_or(CliError::BlockNotFound(id))?;
    let panel = inspect(block, |_, _| {});
    Ok(serde_json::to_value(&panel)?)
}

/// Drive the inspector control at `prop` with `raw` and apply the resulting
/// patch to the deck.
///
/// `prop` may be a dotted path into an object array or a specialized editor,
/// e.g. `items.0.text`. Checkboxes take `true`/`false`; collections take `add`
/// or `remove:<index>`; specialized editors also accept a whole JSON value.
pub fn set(ctx: &Context, id: BlockId, prop: &str, raw: &str) -> Result<Value, CliError> {
    let mut deck = Deck::load(&ctx.deck)?;
    let mut store = deck.store();
    let block = store.get(&id).ok_or(CliError::BlockNotFound(id))?;

    let updates: Rc<RefCell<Vec<(String, Value)>>> = Rc::default();
    let sink = updates.clone();
    let panel = inspect(block, move |name, value| sink.borrow_mut().push((name.to_owned(), value)));
    let control = panel.find(prop).ok_or_else(|| CliError::NoSuchProperty { id, prop: prop.to_owned() })?;
    let event = event_for(control, prop, raw)?;
    if !control.fire(event) {
        return Err(rejected(prop, raw));
    }

    for (name, value) in updates.take() {
        store.apply_data(&id, &patch_for(&name, value))?;
        info!(%id, prop = %name, "property updated");
    }
    deck.sync(&store);
    deck.save(&ctx.deck)?;
    Ok(serde_json::to_value(store.get(&id))?)
}

fn rejected(prop: &str, raw: &str) -> CliError {
    CliError::Rejected { prop: prop.to_owned(), value: raw.to_owned() }
}

fn event_for(control: &Control, prop: &str, raw: &str) -> Result<ControlEvent, CliError> {
    match &control.widget {
        Widget::Checkbox { .. } => match raw {
            "true" => Ok(ControlEvent::Toggle(true)),
            "false" => Ok(ControlEvent::Toggle(false)),
            _ => Err(rejected(prop, raw)),
        },
        Widget::ObjectArray { .. } | Widget::Collection { .. } => {
            if raw == "add" {
                return Ok(ControlEvent::Add);
            }
            match raw.strip_prefix("remove:").map(str::parse::<usize>) {
                Some(Ok(index)) => Ok(ControlEvent::Remove(index)),
                _ => Ok(ControlEvent::Replace(serde_json::from_str(raw)?)),
            }
        }
        Widget::Editor(_) => Ok(ControlEvent::Replace(serde_json::from_str(raw)?)),
        _ => Ok(ControlEvent::Input(raw.to_owned())),
    }
}
