//! CLI for formlinks - renders a link list as an HTML fragment.

use clap::Parser;
use formlinks::{AttributeMap, FormLinks, LinkInput, Links};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Link targets to render, in order
    #[arg(required = true)]
    hrefs: Vec<String>,

    /// Labels paired with the targets by position
    #[arg(long = "label")]
    labels: Vec<String>,

    /// CSS class applied to the whole list
    #[arg(long)]
    class: Option<String>,

    /// Target attribute applied to every link (e.g. _blank)
    #[arg(long)]
    target: Option<String>,

    /// Separator string rendered between two links
    #[arg(long, default_value = " | ")]
    separator: String,

    /// Indentation: a number of spaces, or any other string verbatim
    #[arg(long)]
    indent: Option<String>,

    /// Output file (prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn build_inputs(args: &Args) -> Vec<LinkInput> {
    let mut inputs = Vec::with_capacity(args.hrefs.len());

    for (i, href) in args.hrefs.iter().enumerate() {
        let label = args.labels.get(i);

        if label.is_none() && args.target.is_none() {
            inputs.push(LinkInput::from(href.as_str()));
            continue;
        }

        let mut map = AttributeMap::new();
        map.insert("href".to_owned(), Some(href.clone()));
        if let Some(label) = label {
            map.insert("label".to_owned(), Some(label.clone()));
        }
        if let Some(target) = &args.target {
            map.insert("target".to_owned(), Some(target.clone()));
        }
        inputs.push(LinkInput::from(map));
    }

    inputs
}

fn main() {
    let args = Args::parse();

    let mut element = Links::new();
    element.set_separator(args.separator.as_str());
    if let Some(class) = &args.class {
        element.set_attribute("class", Some(class.clone()));
    }

    if let Err(e) = element.set_links(build_inputs(&args)) {
        eprintln!("Error building links: {}", e);
        std::process::exit(1);
    }

    let mut helper = FormLinks::with_defaults();
    if let Some(indent) = &args.indent {
        match indent.parse::<usize>() {
            Ok(count) => helper.set_indent(count),
            Err(_) => helper.set_indent(indent.as_str()),
        };
    }

    match helper.render(&element) {
        Ok(html) => {
            if let Some(output) = args.output {
                if let Err(e) = std::fs::write(&output, &html) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully wrote {:?}", output);
            } else {
                println!("{}", html);
            }
        }
        Err(e) => {
            eprintln!("Error rendering links: {}", e);
            std::process::exit(1);
        }
    }
}
