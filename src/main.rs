mod cli;

use clap::Parser;
use cli::Args;
use kube_report::adapters::outbound::console::StderrProgressReporter;
use kube_report::adapters::outbound::kubectl::KubectlGateway;
use kube_report::application::dto::ReportRequest;
use kube_report::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use kube_report::application::read_models::ReportReadModelBuilder;
use kube_report::application::use_cases::CollectClusterReportUseCase;
use kube_report::cluster_report::domain::Scope;
use kube_report::cluster_report::policies::SchedulingPolicy;
use kube_report::config::{discover_config, load_config_from_path, Settings};
use kube_report::ports::outbound::ProgressReporter;
use kube_report::shared::error::{ExitCode, ReportError};
use kube_report::shared::security::{validate_context_name, validate_namespace_name};
use kube_report::shared::Result;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.log_directive());

    // Dropping the pipeline future on Ctrl-C kills running kubectl children
    // and removes the staging workspace
    let exit_code = tokio::select! {
        result = run(args) => match result {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                print_error(&e);
                exit_code_for(&e)
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\n⚠️  Interrupted, no report was written.");
            ExitCode::Interrupted
        }
    };

    process::exit(exit_code.as_i32());
}

/// Logs go to stderr; `RUST_LOG` wins over the verbosity flag
fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    // Identifiers become kubectl arguments, check them first
    validate_context_name(&args.cluster)?;
    if let Some(namespace) = &args.namespace {
        validate_namespace_name(namespace)?;
    }

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(args.overrides(), config)?;
    tracing::debug!(?settings, "resolved settings");

    let progress_reporter = StderrProgressReporter::new();
    if let Some(warning) = &settings.format_warning {
        progress_reporter.report_warning(warning);
    }

    progress_reporter.report(&format!(
        "📊 Collecting report for cluster '{}' ({})",
        args.cluster,
        Scope::from_namespace(args.namespace.clone())
    ));

    let gateway = KubectlGateway::new(
        settings.kubectl.clone(),
        args.cluster.clone(),
        settings.query_timeout,
    );
    let use_case = CollectClusterReportUseCase::new(gateway, &progress_reporter);

    let request = ReportRequest::new(
        args.cluster.clone(),
        Scope::from_namespace(args.namespace.clone()),
        settings.mesh_namespace_patterns.clone(),
    );
    let response = use_case.execute(request).await?;

    let file_name = format!(
        "{}.{}",
        response.metadata.file_stem(),
        settings.format.extension()
    );
    let policy = SchedulingPolicy::new(settings.suspicious_node_selectors.clone());
    let read_model = ReportReadModelBuilder::build(response, &policy);

    if read_model.summary.config_warning {
        progress_reporter.report_warning(&format!(
            "Namespace node selectors pin workloads to system or control-plane nodes: {}",
            read_model.summary.flagged_namespaces.join(", ")
        ));
    }

    progress_reporter.report_step(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let document = formatter.format(&read_model)?;

    if args.stdout {
        let presenter = PresenterFactory::create(PresenterType::Stdout);
        presenter.present(&document)?;
        progress_reporter.report_completion("✅ Report printed");
    } else {
        let output_path = settings.output_dir.join(file_name);
        let presenter = PresenterFactory::create(PresenterType::File(output_path.clone()));
        presenter.present(&document)?;
        progress_reporter.report_completion(&format!(
            "✅ Report written to {}",
            output_path.display()
        ));
        println!("{}", output_path.display());
    }

    Ok(())
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<ReportError>()
        .map(ReportError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}

fn print_error(error: &anyhow::Error) {
    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", error);

    for cause in error.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
}
