//! Storefront cart walkthrough.
//!
//! ```bash
//! # Print the sample catalog with variant price tables
//! agrimart catalog
//!
//! # Walk the cart flow: add, merge, adjust, memo, checkout link
//! agrimart demo
//! ```
//!
//! The destination WhatsApp number comes from `AGRIMART_WHATSAPP`
//! (international format without `+`).

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

use agrimart_billing::{Customer, OrderSummary, WhatsappCheckout};
use agrimart_cart::{Cart, LineItem};
use agrimart_catalog::{Product, ProductId, Variant, VariantLabel};
use agrimart_core::Money;

#[derive(Parser)]
#[command(name = "agrimart")]
#[command(author, version, about = "Agricultural-goods storefront cart demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample catalog with variant price tables
    Catalog,
    /// Walk the full cart flow and print the order memo and checkout link
    Demo,
}

fn main() -> Result<()> {
    agrimart_observability::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog => print_catalog()?,
        Commands::Demo => run_demo()?,
    }

    Ok(())
}

fn product(
    id: &str,
    title: &str,
    image_ref: &str,
    price: &str,
    sizes: &[(&str, &str)],
) -> Result<Product> {
    let variants = sizes
        .iter()
        .map(|(label, price)| {
            Ok(Variant {
                label: VariantLabel::new(*label),
                price: Money::parse(price)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Product {
        id: ProductId::new(id),
        title: title.to_string(),
        image_ref: image_ref.to_string(),
        price: Money::parse(price)?,
        variants,
    })
}

fn sample_catalog() -> Result<Vec<Product>> {
    Ok(vec![
        product(
            "npk-17",
            "NPK Fertilizer",
            "assets/npk-fertilizer.jpg",
            "₹750",
            &[("1 kg", "₹300"), ("5 kg", "₹750"), ("10 kg", "₹1400")],
        )?,
        product(
            "pesticide-02",
            "Organic Pesticide",
            "assets/organic-pesticide.jpg",
            "₹450",
            &[
                ("10ml", "₹80"),
                ("100ml", "₹150"),
                ("250ml", "₹300"),
                ("500ml", "₹600"),
                ("1L", "₹750"),
            ],
        )?,
        product(
            "seeds-09",
            "Premium Seeds Pack",
            "assets/premium-seeds.jpg",
            "₹299",
            &[("100g", "₹299"), ("250g", "₹599"), ("500g", "₹999")],
        )?,
    ])
}

fn print_catalog() -> Result<()> {
    for product in sample_catalog()? {
        println!("{} ({})", product.title, product.id);
        if product.variants.is_empty() {
            println!("  {} - {}", VariantLabel::default(), product.price);
        }
        for variant in &product.variants {
            println!("  {} - {}", variant.label, variant.price);
        }
        println!();
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    let phone = std::env::var("AGRIMART_WHATSAPP").unwrap_or_else(|_| {
        tracing::warn!("AGRIMART_WHATSAPP not set; using placeholder number");
        "91XXXXXXXXXX".to_string()
    });

    let catalog = sample_catalog()?;
    let fertilizer = &catalog[0];
    let pesticide = &catalog[1];
    let seeds = &catalog[2];

    let mut cart = Cart::new();
    let events = cart.subscribe();

    // Two picks of the same size collapse into one entry.
    let five_kg = fertilizer
        .variant(&VariantLabel::new("5 kg"))
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("sample catalog is missing the 5 kg fertilizer size"))?;
    cart.add_item(LineItem::snapshot(fertilizer, &five_kg, 1))?;
    cart.add_item(LineItem::snapshot(fertilizer, &five_kg, 2))?;

    // One litre of pesticide, then one more via the "+" button.
    let litre = pesticide
        .variant(&VariantLabel::new("1L"))
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("sample catalog is missing the 1L pesticide size"))?;
    let litre_line = LineItem::snapshot(pesticide, &litre, 1);
    cart.add_item(litre_line.clone())?;
    cart.adjust_quantity(&litre_line, 1)?;

    // A seeds pack picked by mistake and removed again.
    let pack = seeds.default_variant();
    cart.add_item(LineItem::snapshot(seeds, &pack, 1))?;
    if cart.remove_item(&seeds.id, &pack.label).is_some() {
        tracing::info!(product = %seeds.id, "entry removed before checkout");
    }

    while let Ok(event) = events.try_recv() {
        tracing::info!(event_type = event.event_type(), "cart changed");
    }
    tracing::info!(
        cart_id = %cart.id(),
        version = cart.version(),
        entries = cart.entry_count(),
        units = cart.item_count(),
        "cart ready for checkout"
    );

    let customer = Customer {
        name: "Ramesh Kumar".to_string(),
        address: "14 Mandi Road, Karnal".to_string(),
        phone: "9876543210".to_string(),
        pincode: "132001".to_string(),
    };

    let summary = OrderSummary::build(&cart, customer, Utc::now());
    let checkout = WhatsappCheckout::new(phone);

    println!("{summary}");
    println!();
    println!("Checkout link: {}", checkout.order_link(&summary));

    Ok(())
}
