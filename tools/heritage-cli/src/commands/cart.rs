//! Cart commands.

use anyhow::{bail, Result};
use heritage_cache::FileStore;
use heritage_commerce::cart::CartEvent;
use heritage_commerce::Storefront;
use heritage_i18n::format;
use std::cell::RefCell;
use std::rc::Rc;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::format_price;

const WIDTHS: [usize; 5] = [3, 34, 10, 4, 16];

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.open_storefront()?;
    ctx.output
        .debug(&format!("storage: {}", ctx.storage_dir().display()));

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    storefront
        .cart_mut()
        .subscribe(move |event: &CartEvent| sink.borrow_mut().push(event.clone()));

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add { id, qty, variant } => {
            let added = storefront.add_to_cart(&id, variant, qty)?;
            if added != qty {
                ctx.output
                    .warn(&format!("Quantity adjusted to {} for product {}", added, id));
            }
        }
        CartCommand::Remove { id } => {
            require_line(&storefront, &id)?;
            storefront.cart_mut().remove_item(&id);
        }
        CartCommand::Set { id, qty } => {
            require_line(&storefront, &id)?;
            storefront.cart_mut().update_quantity(&id, qty);
        }
        CartCommand::Clear => storefront.cart_mut().clear_cart(),
    }

    for event in events.borrow().iter() {
        ctx.output.debug(&format!(
            "revision {}: {:?}",
            event.revision, event.change
        ));
    }
    if let Some(last) = events.borrow().last() {
        ctx.output.success(&format!(
            "Cart updated: {}",
            format(
                "cart.items",
                storefront.language(),
                &[("count", last.totals.total_items.to_string())]
            )
        ));
    }

    print_cart(&storefront, ctx);
    Ok(())
}

/// The cart ignores unknown ids; the CLI reports them.
fn require_line(storefront: &Storefront<FileStore>, id: &str) -> Result<()> {
    if storefront.cart().line(id).is_none() {
        bail!("Product {} is not in the cart", id);
    }
    Ok(())
}

fn print_cart(storefront: &Storefront<FileStore>, ctx: &Context) {
    let cart = storefront.cart();
    let language = storefront.language();
    let i18n = storefront.i18n();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.items(),
            "totals": cart.totals(),
            "total_display": cart.totals().display_total(language),
        }));
        return;
    }

    ctx.output.header(i18n.t("nav.cart"));

    if cart.is_empty() {
        ctx.output.info(i18n.t("cart.empty.title"));
        ctx.output.info(i18n.t("cart.empty.hint"));
        return;
    }

    ctx.output
        .table_row(&["ID", "NAME", "VARIANT", "QTY", "TOTAL"], &WIDTHS);
    ctx.output.rule(&WIDTHS);
    for line in cart.items() {
        let quantity = line.quantity.to_string();
        let total = format_price(&line.line_total(), language);
        ctx.output.table_row(
            &[
                line.product_id.as_str(),
                line.display_name(language),
                line.variant.as_deref().unwrap_or("-"),
                &quantity,
                &total,
            ],
            &WIDTHS,
        );
    }

    let totals = cart.totals();
    ctx.output.header(i18n.t("cart.summary"));
    ctx.output.kv(
        i18n.t("cart.subtotal"),
        &format("cart.items", language, &[("count", totals.total_items.to_string())]),
    );
    ctx.output
        .kv(i18n.t("cart.shipping"), i18n.t("cart.shippingPending"));
    ctx.output
        .kv(i18n.t("cart.total"), &totals.display_total(language));
}
