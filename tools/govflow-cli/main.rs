use clap::Parser;
use govflow::prelude::*;
use std::fs;
use std::process;

// --- CLI Definition ---

/// Assemble a governance workflow from run-ingestion-pipeline node
/// definitions and hand the model off as an artifact or JSON.
#[derive(Parser)]
#[command(name = "govflow-cli", version)]
struct Cli {
    /// Path to a JSON file holding one node definition or a list of them.
    definitions: String,

    /// Id of the enclosing workflow process.
    #[arg(long, default_value = "workflow")]
    workflow_id: String,

    /// Write the assembled model to this path as a binary artifact.
    #[arg(long)]
    out: Option<String>,

    /// Print the assembled model as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

// --- Assembly ---

fn load_definitions(path: &str) -> Result<Vec<RunIngestionPipelineTaskDefinition>> {
    let content = fs::read_to_string(path)?;
    // Accept either a list of definitions or a single one.
    let definitions = match serde_json::from_str::<Vec<RunIngestionPipelineTaskDefinition>>(&content)
    {
        Ok(list) => list,
        Err(_) => vec![serde_json::from_str::<RunIngestionPipelineTaskDefinition>(
            &content,
        )?],
    };
    Ok(definitions)
}

fn assemble(workflow_id: &str, definitions: &[RunIngestionPipelineTaskDefinition]) -> Result<Workflow> {
    let mut nodes = Vec::new();
    for definition in definitions {
        nodes.push(RunIngestionPipelineTask::new(definition)?);
    }

    let mut builder = Workflow::builder(workflow_id);
    for node in &nodes {
        builder = builder.add_node(node);
    }
    Ok(builder.build()?)
}

fn summarize(workflow: &Workflow) {
    for process in workflow.model().processes() {
        println!("process '{}':", process.id);
        for element in process.flow_elements() {
            println!("  {}", element);
            if let FlowElement::SubProcess(sub) = element {
                for inner in sub.flow_elements() {
                    println!("    {}", inner);
                }
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let definitions = load_definitions(&cli.definitions)?;
    println!(
        "Assembling {} node(s) into workflow '{}'",
        definitions.len(),
        cli.workflow_id
    );

    let workflow = assemble(&cli.workflow_id, &definitions)?;
    let artifact = WorkflowArtifact::new(workflow.model().clone());

    if cli.json {
        println!("{}", artifact.to_json()?);
    } else {
        summarize(&workflow);
    }

    if let Some(out) = &cli.out {
        artifact.save(out)?;
        println!("Artifact written to '{}'", out);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
