//! Resolve a handful of font requests against the installed fonts
//!
//! Run with: cargo run -p typeface-system --example resolve_fonts -- [contentSize] [customFont]
//! Set RUST_LOG=typeface_core=debug to watch descriptor composition.

use tracing_subscriber::EnvFilter;
use typeface_core::{FontRequest, FontResolver, FontSource, TextStyle, Weight};
use typeface_system::{ContentSizeCategory, SystemFontProvider, SystemProviderConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let content_size = match args.next().map(|arg| arg.parse::<ContentSizeCategory>()) {
        Some(Ok(category)) => category,
        Some(Err(e)) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
        None => ContentSizeCategory::default(),
    };
    let custom = args.next().unwrap_or_else(|| "Helvetica".to_string());

    let config = SystemProviderConfig::new().with_content_size(content_size);
    let provider = SystemFontProvider::new(config);
    println!(
        "=== {} faces discovered, content size {} ===\n",
        provider.catalog().len(),
        content_size
    );

    let resolver = FontResolver::new(provider);
    let requests = vec![
        ("headline italic monospaced", FontRequest::headline().italic().monospaced()),
        ("body small caps", FontRequest::body().small_caps()),
        (
            "system 17 regular, then bold",
            FontRequest::new(FontSource::system_size(17.0, Some(Weight::Regular), None))
                .weight(Weight::Bold),
        ),
        (
            "custom relative to body",
            FontRequest::custom_relative(&custom, 16.0, TextStyle::Body).monospaced_digits(),
        ),
        ("custom missing", FontRequest::custom_fixed("NonexistentFontXYZ", 14.0).bold()),
    ];

    for (label, request) in requests {
        match resolver.resolve(&request) {
            Ok(font) => {
                println!("{}:", label);
                println!("  family:      {}", font.family);
                println!("  point size:  {:.1}", font.point_size);
                println!("  weight:      {}", font.weight);
                println!("  traits:      {:?}", font.descriptor.traits());
                let features: Vec<String> = font
                    .descriptor
                    .attributes()
                    .features()
                    .iter()
                    .map(|f| f.tag_string())
                    .collect();
                println!("  features:    {:?}", features);
                if let Some(line_height) = font.line_height {
                    println!("  line height: {:.1}", line_height);
                }
                if let Some(path) = &font.location {
                    println!("  file:        {}", path.display());
                }
                if font.used_fallback {
                    println!("  (fell back to the system font)");
                }
            }
            Err(e) => println!("{}: error: {}", label, e),
        }
        println!();
    }
}
