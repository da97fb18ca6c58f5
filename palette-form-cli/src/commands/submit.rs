use crate::answers;
use anyhow::{bail, Context, Result};
use palette_form::error::ErrorChain;
use palette_form::i18n::SUBMIT_LABEL;
use palette_form::prelude::*;
use std::path::{Path, PathBuf};

/// Submit the answers in `answers_path`, storing the result in `storage_path`
pub async fn run(config: &AppConfig, answers_path: &Path, storage_path: PathBuf) -> Result<()> {
    let document = MemoryDocument::with_form(answers::load(answers_path)?);
    let language = document
        .selected_language()
        .unwrap_or_else(|| config.i18n.default_language.clone());
    document.add_submit_button(lookup(SUBMIT_LABEL, &language));

    let transport = HyperTransport::from_config(&config.client)
        .context("Cannot reach the submission endpoint")?;
    let storage = FileStorage::new(storage_path);
    let storage_path = storage.path().to_path_buf();

    log::info!(
        "Submitting {} to {}{}",
        answers_path.display(),
        config.client.base_url,
        config.client.submit_path
    );

    let page = QuestionnairePage::new(
        config,
        Arc::new(document),
        Arc::new(storage),
        Arc::new(ConsoleView),
        Arc::new(transport),
    );

    match page.submit().await {
        SubmitOutcome::Submitted { result } => {
            log::info!(
                "Stored result under '{}' in {}",
                config.client.result_storage_key,
                storage_path.display()
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        SubmitOutcome::Failed(err) => {
            let chain = ErrorChain::new(&err);
            if err.is_transport() {
                log::error!(
                    "Endpoint {}{} did not accept the answers: {}",
                    config.client.base_url,
                    config.client.submit_path,
                    chain.root_cause()
                );
            }
            bail!("Submission failed: {}", chain)
        }
        SubmitOutcome::Skipped => bail!("Submission skipped: a submission is already running"),
    }
}
