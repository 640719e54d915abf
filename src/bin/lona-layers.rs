use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use lona_layers::{
    AccessibilityType, Component, ComponentLibrary, ComponentResolver, LayerId, LayerTree,
};

#[derive(Parser, Debug)]
#[command(name = "lona-layers", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the layer tree with sizing rules and accessibility.
    Inspect(InspectArgs),
    /// Decode and re-encode a document, dropping default parameter values.
    Normalize(NormalizeArgs),
    /// List the accessibility element paths of a component.
    A11y(A11yArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input `.component` or layer JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Input `.component` or layer JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct A11yArgs {
    /// Input `.component` or layer JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Workspace directory searched for referenced components.
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Expand references to other components.
    #[arg(long)]
    subcomponents: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Normalize(args) => cmd_normalize(args),
        Command::A11y(args) => cmd_a11y(args),
    }
}

fn read_component(path: &Path) -> anyhow::Result<Component> {
    Component::load(path).with_context(|| format!("load component '{}'", path.display()))
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let component = read_component(&args.in_path)?;
    let tree = component.root();
    describe(tree, tree.root(), 0);
    Ok(())
}

fn describe(tree: &LayerTree, id: LayerId, depth: usize) {
    let node = &tree[id];
    let a11y = match tree.accessibility(id) {
        AccessibilityType::Auto => "auto",
        AccessibilityType::None => "none",
        AccessibilityType::Element(_) => "element",
        AccessibilityType::Container(_) => "container",
    };
    println!(
        "{:indent$}{} ({}) width={} height={} a11y={}",
        "",
        node.name(),
        node.layer_type().display_name(),
        tree.width_sizing_rule(id),
        tree.height_sizing_rule(id),
        a11y,
        indent = depth * 2,
    );
    for &child in node.children() {
        describe(tree, child, depth + 1);
    }
}

fn cmd_normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let s = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&s).with_context(|| "parse document JSON")?;

    let data = if value.get("rootLayer").is_some() {
        Component::from_value("", &value)?.to_data()?
    } else {
        let tree = LayerTree::from_data(&value)?;
        tree.to_data(tree.root())?
    };
    let json = serde_json::to_string_pretty(&data)?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, format!("{json}\n"))
                .with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_a11y(args: A11yArgs) -> anyhow::Result<()> {
    let component = read_component(&args.in_path)?;

    let library = if args.subcomponents {
        let root = match &args.workspace {
            Some(dir) => dir.clone(),
            None => args
                .in_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        Some(
            ComponentLibrary::load_workspace(&root)
                .with_context(|| format!("load workspace '{}'", root.display()))?,
        )
    } else {
        None
    };

    let tree = component.root();
    let resolver = library.as_ref().map(|l| l as &dyn ComponentResolver);
    for path in tree.accessibility_element_paths(tree.root(), resolver) {
        println!("{}", path.join("/"));
    }
    Ok(())
}
