use crate::cli::ViewArgs;
use crate::config::{self, FileConfig};
use crate::error::{CliError, Result};
use provis::view::ViewRequest;
use tracing::info;

const VIEWER_SCRIPT_URL: &str = "https://3dmol.org/build/3Dmol-min.js";

pub fn run(args: ViewArgs) -> Result<()> {
    let file_config = FileConfig::load(args.config.as_deref())?;
    let view_config = config::resolve_view_config(
        &file_config,
        args.style.as_deref(),
        args.color_scheme.as_deref(),
    )?;

    info!("Reading structure text from {:?}", &args.input);
    let pdb_text = std::fs::read_to_string(&args.input)?;

    let request = ViewRequest::new(&pdb_text, view_config);
    let html = render_page(&request)?;
    std::fs::write(&args.output, html)?;

    println!("Viewer page written to: {}", args.output.display());
    Ok(())
}

/// Builds a standalone HTML page handing the raw PDB text to the viewer.
///
/// The text is embedded verbatim (JSON-escaped into a script literal); the
/// page is the external rendering collaborator's territory from here on. A
/// style with no viewer directive emits no style call at all, leaving the
/// viewer's default representation in place.
fn render_page(request: &ViewRequest) -> Result<String> {
    let pdb_literal =
        serde_json::to_string(request.pdb_text()).map_err(|e| CliError::Other(e.into()))?;

    let style_call = match request.config.style.directive() {
        Some(selector) => format!(
            "viewer.setStyle({{{}: {{colorscheme: \"{}\"}}}});\n  ",
            selector, request.config.color_scheme
        ),
        None => String::new(),
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>provis viewer</title>
<script src="{script_url}"></script>
<style>
  #viewer {{ width: 800px; height: 600px; position: relative; }}
</style>
</head>
<body>
<div id="viewer"></div>
<script>
  const pdbData = {pdb_literal};
  const viewer = $3Dmol.createViewer("viewer");
  viewer.addModel(pdbData, "pdb");
  {style_call}viewer.zoomTo();
  viewer.render();
</script>
</body>
</html>
"#,
        script_url = VIEWER_SCRIPT_URL,
        pdb_literal = pdb_literal,
        style_call = style_call,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use provis::view::{ColorScheme, Style, ViewConfig};

    const PDB_TEXT: &str = "ATOM      1  CA  ALA A   1      11.104  13.207   2.100\n";

    fn request_with(style: Style, color_scheme: ColorScheme) -> ViewConfig {
        ViewConfig {
            style,
            color_scheme,
        }
    }

    #[test]
    fn page_embeds_the_text_and_style_call() {
        let config = request_with(Style::Cartoon, ColorScheme::Chain);
        let page = render_page(&ViewRequest::new(PDB_TEXT, config)).unwrap();

        assert!(page.contains(r#"viewer.setStyle({cartoon: {colorscheme: "chain"}});"#));
        assert!(page.contains("ALA A   1"));
        assert!(page.contains(VIEWER_SCRIPT_URL));
    }

    #[test]
    fn surface_style_emits_no_style_call() {
        let config = request_with(Style::Surface, ColorScheme::Spectrum);
        let page = render_page(&ViewRequest::new(PDB_TEXT, config)).unwrap();

        assert!(!page.contains("viewer.setStyle"));
        assert!(page.contains("viewer.zoomTo()"));
    }

    #[test]
    fn color_scheme_keeps_the_viewer_spelling() {
        let config = request_with(Style::Stick, ColorScheme::SsPymol);
        let page = render_page(&ViewRequest::new(PDB_TEXT, config)).unwrap();

        assert!(page.contains(r#"{stick: {colorscheme: "ssPyMol"}}"#));
    }

    #[test]
    fn newlines_in_the_text_are_escaped_into_the_literal() {
        let config = ViewConfig::default();
        let page = render_page(&ViewRequest::new("LINE1\nLINE2\n", config)).unwrap();

        assert!(page.contains(r#""LINE1\nLINE2\n""#));
    }

    #[test]
    fn run_writes_the_page_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mini.pdb");
        let output = dir.path().join("mini.html");
        std::fs::write(&input, PDB_TEXT).unwrap();

        let args = ViewArgs {
            input,
            output: output.clone(),
            style: Some("sphere".to_string()),
            color_scheme: Some("element".to_string()),
            config: None,
        };
        assert!(run(args).is_ok());

        let page = std::fs::read_to_string(output).unwrap();
        assert!(page.contains(r#"viewer.setStyle({sphere: {colorscheme: "element"}});"#));
    }
}
