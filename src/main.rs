use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use retroshell::session::{Session, SessionSettings};
use retroshell::theme::{load_theme_document, ElementProps};

/// Theme inspector: resolves one view of a converted theme document and
/// prints the normalized element list, the way a renderer would see it.
fn main() -> ExitCode {
    retroshell::logging::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!(
            "usage: retroshell <theme.json> [view] [variant] [aspect-ratio] [color-scheme]"
        );
        anyhow::bail!("missing theme document path");
    };
    let view = args.next().unwrap_or_else(|| "system".to_string());
    let variant = args.next().unwrap_or_default();
    let aspect_ratio = args.next().unwrap_or_default();
    let color_scheme = args.next().unwrap_or_default();

    let document = load_theme_document(Path::new(&path))
        .with_context(|| format!("loading theme document {path}"))?;

    let mut session = Session::with_settings(SessionSettings {
        theme_name: document.name.clone(),
        selected_variant: variant,
        selected_color_scheme: color_scheme,
        selected_aspect_ratio: aspect_ratio,
    });
    session.install_document(document);
    session.set_view(match view.as_str() {
        "gamelist" => retroshell::session::ScreenView::Gamelist,
        "menu" => retroshell::session::ScreenView::Menu,
        "play" => retroshell::session::ScreenView::Play,
        _ => retroshell::session::ScreenView::System,
    });

    let settings = session.settings().clone();
    println!(
        "{} / {view} (variant={}, aspectRatio={}, colorScheme={})",
        settings.theme_name,
        settings.selected_variant,
        settings.selected_aspect_ratio,
        settings.selected_color_scheme,
    );

    for element in session.normalized_elements() {
        let kind = element
            .props
            .kind()
            .map(|k| k.as_str().to_string())
            .unwrap_or_else(|| match &element.props {
                ElementProps::Unknown { type_name } => format!("unknown({type_name})"),
                _ => "unknown".to_string(),
            });
        println!(
            "  {:<20} {:<12} pos=({:.3}, {:.3}) size=({:.3}, {:.3}) z={}",
            element.name,
            kind,
            element.placement.pos.x,
            element.placement.pos.y,
            element.placement.size.x,
            element.placement.size.y,
            element.placement.z_index,
        );
    }
    Ok(())
}
