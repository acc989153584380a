//! File loading tests run inside a Figment jail.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use std::path::Path;

use super::{OptionsDocument, load_options_document, load_options_file};
use crate::{JobOptions, OptionKey, OptionValue, OptionsError, Scope};

fn with_jail<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut figment::Jail) -> Result<()>,
{
    figment::Jail::try_with(|j| {
        f(j).map_err(|err| {
            // figment::Error currently only implements `From<String>`, so stringify the source.
            figment::Error::from(err.to_string())
        })
    })
    .map_err(|err| anyhow!(err.to_string()))
}

fn to_anyhow<T>(result: crate::OptionsResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}

const DOCUMENT: &str = r#"
workers = 4

[job_options]
timeout = 600
killondelay = true

[queues.email]
workers = 2

[queues.email.job_options]
maxtries = 3
killondelay = false
noredislogonsuccess = true
"#;

#[rstest]
fn missing_files_load_as_none() -> Result<()> {
    with_jail(|_| {
        ensure!(to_anyhow(load_options_file(Path::new("absent.toml")))?.is_none());
        ensure!(to_anyhow(load_options_document(Path::new("absent.toml")))?.is_none());
        Ok(())
    })
}

#[rstest]
#[case::toml("job.toml", "timeout = 0\nnofail = false\n")]
#[case::json("job.json", r#"{"timeout": 0, "nofail": false}"#)]
fn option_files_keep_explicit_zero_values(#[case] name: &str, #[case] body: &str) -> Result<()> {
    with_jail(|jail| {
        jail.create_file(name, body)?;
        let opts = to_anyhow(load_options_file(Path::new(name)))?
            .ok_or_else(|| anyhow!("{name} should load"))?;
        ensure!(opts.explicit(OptionKey::Timeout) == Some(OptionValue::Integer(0)));
        ensure!(opts.explicit(OptionKey::NoFail) == Some(OptionValue::Flag(false)));
        ensure!(!opts.is_set(OptionKey::MaxTries));
        ensure!(opts.timeout() == 3600, "zero timeout should fall back");
        Ok(())
    })
}

#[rstest]
#[case::unknown_key("job.toml", "maxTries = 3\n")]
#[case::wrong_type("job.toml", "drop = \"yes\"\n")]
#[case::wrong_type_json("job.json", r#"{"timeout": "ten"}"#)]
fn option_files_reject_schema_violations(#[case] name: &str, #[case] body: &str) -> Result<()> {
    with_jail(|jail| {
        jail.create_file(name, body)?;
        let result = load_options_file(Path::new(name));
        ensure!(
            matches!(result.as_ref().err().map(|e| &**e), Some(OptionsError::Parse(_))),
            "expected a parse error for {name}"
        );
        Ok(())
    })
}

#[rstest]
#[case::toml("jobs.toml", "[job_options\ntimeout = 1")]
#[case::json("jobs.json", "{\"job_options\": ")]
fn syntax_errors_name_the_file(#[case] name: &str, #[case] body: &str) -> Result<()> {
    with_jail(|jail| {
        jail.create_file(name, body)?;
        let Err(err) = load_options_document(Path::new(name)) else {
            return Err(anyhow!("{name} should fail to parse"));
        };
        ensure!(matches!(&*err, OptionsError::File { .. }));
        ensure!(err.to_string().contains(name), "error should mention {name}");
        Ok(())
    })
}

#[rstest]
fn document_layers_queue_over_global() -> Result<()> {
    with_jail(|jail| {
        jail.create_file("jobs.toml", DOCUMENT)?;
        let doc = to_anyhow(load_options_document(Path::new("jobs.toml")))?
            .ok_or_else(|| anyhow!("document should load"))?;
        ensure!(doc.path().is_some_and(|p| p.as_str().ends_with("jobs.toml")));

        let resolution = doc.resolve("email", &JobOptions::new());
        let opts = resolution.options();
        ensure!(opts.timeout() == 600);
        ensure!(opts.max_tries() == 3);
        ensure!(!opts.kill_on_delay(), "queue false must beat global true");
        ensure!(!opts.should_persist_log(crate::Outcome::Success));
        ensure!(resolution.provenance(OptionKey::KillOnDelay) == Some(Scope::Queue));
        ensure!(resolution.provenance(OptionKey::Timeout) == Some(Scope::Global));
        Ok(())
    })
}

#[rstest]
fn document_layers_carry_the_source_path() -> Result<()> {
    with_jail(|jail| {
        jail.create_file("jobs.toml", DOCUMENT)?;
        let doc = to_anyhow(load_options_document(Path::new("jobs.toml")))?
            .ok_or_else(|| anyhow!("document should load"))?;
        let composer = doc.composer("email");
        let scopes: Vec<Scope> = composer.layers().iter().map(|l| l.scope()).collect();
        ensure!(scopes == vec![Scope::Builtin, Scope::Global, Scope::Queue]);
        ensure!(composer
            .layers()
            .iter()
            .filter(|l| l.scope() != Scope::Builtin)
            .all(|l| l.path().is_some()));
        Ok(())
    })
}

#[rstest]
fn unknown_queue_uses_global_and_builtin() -> Result<()> {
    let doc = to_anyhow(OptionsDocument::from_toml_str(DOCUMENT))?;
    let opts = doc.effective_options("reports", &JobOptions::new());
    ensure!(opts.timeout() == 600);
    ensure!(opts.max_tries() == 1);
    ensure!(opts.kill_on_delay());
    ensure!(opts.redis_log_expire_after() == 604_800);
    Ok(())
}

#[rstest]
fn job_options_override_the_document() -> Result<()> {
    let doc = to_anyhow(OptionsDocument::from_json_str(
        r#"{"job_options": {"drop": true}, "queues": {"email": {"job_options": {"timeout": 30}}}}"#,
    ))?;
    let job = to_anyhow(JobOptions::from_json_str(r#"{"drop": false, "timeout": 5}"#))?;
    let opts = doc.effective_options("email", &job);
    ensure!(opts.timeout() == 5);
    ensure!(!opts.drop());
    Ok(())
}

#[rstest]
fn empty_document_resolves_to_builtin() -> Result<()> {
    let doc = to_anyhow(OptionsDocument::from_toml_str(""))?;
    ensure!(doc.effective_options("any", &JobOptions::new()) == JobOptions::builtin());
    Ok(())
}
