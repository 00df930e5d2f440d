use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;

use recast_core::context::{AppConfig, AppConfigExt, SessionHandle, resolve_log_path};
use recast_core::directory_watcher::{self as core_watcher, DirectoryEvent, DirectoryWatcher};
use recast_core::game_data::{self, Job, SkillInfo};
use recast_core::log_line::LineReader;

use crate::CliContext;

/// Print the skill database, optionally restricted to one job or to
/// trackable entries
pub fn skills(job: Option<&str>, trackable_only: bool) -> Result<(), String> {
    let job = match job {
        Some(text) => {
            Some(Job::from_abbr(text).ok_or_else(|| format!("unknown job: {text}"))?)
        }
        None => None,
    };

    let mut entries: Vec<&SkillInfo> = match job {
        Some(job) => game_data::skills_for_job(job),
        None => game_data::SKILLS.values().collect(),
    };
    if trackable_only {
        entries.retain(|s| s.is_trackable());
    }
    entries.sort_by_key(|s| (s.job.abbr(), s.id));

    println!("{:<6} {:<24} {:<5} Cooldown", "Id", "Skill", "Job");
    println!("{}", "-".repeat(48));
    for skill in &entries {
        let cooldown = if skill.cooldown_secs == 0 {
            "variable".to_string()
        } else {
            format!("{}s", skill.cooldown_secs)
        };
        println!(
            "{:<6} {:<24} {:<5} {}",
            skill.id,
            skill.name,
            skill.job.abbr(),
            cooldown
        );
    }
    println!("\nTotal: {} skills", entries.len());
    Ok(())
}

/// Replay a complete log file and print the timers it leaves behind
pub async fn replay(
    ctx: &mut CliContext,
    path: &str,
    player: Option<String>,
) -> Result<(), String> {
    apply_overrides(&mut ctx.config, player);

    let path = resolve_log_path(&ctx.config, Path::new(path));
    let session = ctx.start_session();
    let reader = LineReader::from(path, Arc::clone(&session));

    let started = Instant::now();
    let summary = reader.replay().await.map_err(|e| e.to_string())?;

    println!(
        "replayed {} lines in {}ms, {} timers armed",
        summary.lines,
        started.elapsed().as_millis(),
        summary.timers_armed
    );
    print_active_timers(&session).await;
    Ok(())
}

/// Follow a single log file, or watch a directory and follow its newest file
pub async fn tail(
    ctx: &mut CliContext,
    path: Option<String>,
    directory: Option<String>,
    player: Option<String>,
) -> Result<(), String> {
    apply_overrides(&mut ctx.config, player);

    match (path, directory) {
        (Some(_), Some(_)) => Err("give either --path or --directory, not both".to_string()),
        (Some(path), None) => {
            let path = resolve_log_path(&ctx.config, Path::new(&path));
            let session = ctx.start_session();

            println!("Tailing {} (Ctrl-C to stop)", path.display());
            LineReader::from(path, session)
                .tail(&mut ctx.tasks.sweep)
                .await
                .map_err(|e| e.to_string())
        }
        (None, directory) => {
            let dir = directory.unwrap_or_else(|| ctx.config.log_directory.clone());
            if dir.is_empty() {
                return Err("no directory given and none configured".to_string());
            }
            watch_directory(ctx, PathBuf::from(dir)).await
        }
    }
}

/// Show the persisted configuration, applying any requested updates first
pub fn config(
    ctx: &mut CliContext,
    set_player: Option<String>,
    set_directory: Option<String>,
    enable_timers: Option<bool>,
) -> Result<(), String> {
    let mut changed = false;

    if let Some(name) = set_player {
        ctx.config.player_name = name;
        changed = true;
    }
    if let Some(dir) = set_directory {
        let path = PathBuf::from(&dir);
        if !(path.exists() && path.is_dir()) {
            return Err(format!("invalid directory: {dir}"));
        }
        ctx.config.log_directory = dir;
        changed = true;
    }
    if let Some(enabled) = enable_timers {
        ctx.config.timers.enabled = enabled;
        changed = true;
    }

    if changed {
        ctx.config.clone().save().map_err(|e| e.to_string())?;
        println!("Configuration saved\n");
    }

    show_config(&ctx.config);
    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn show_config(config: &AppConfig) {
    println!("Player name:     {}", config.player_name);
    println!("Log directory:   {}", config.log_directory);
    println!("Timers enabled:  {}", config.timers.enabled);
    println!(
        "Tracked skills:  {}",
        if config.timers.tracked_skills.is_empty() {
            "all trackable".to_string()
        } else {
            config
                .timers
                .tracked_skills
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
    );
    println!("Own cooldowns:   {}", config.timers.show_own_cooldowns);
    println!("Party cooldowns: {}", config.timers.show_party_cooldowns);
    println!("Alerts enabled:  {}", config.alerts.enabled);
    println!("Alert triggers:  {}", config.alerts.triggers.len());
}

/// Replay and tail always want timers on; the config switch governs the
/// overlay host, not diagnostics
fn apply_overrides(config: &mut AppConfig, player: Option<String>) {
    if let Some(name) = player {
        config.player_name = name;
    }
    if !config.timers.enabled {
        println!("Note: cooldown timers are disabled in config; enabling for this run");
        config.timers.enabled = true;
    }
}

async fn watch_directory(ctx: &mut CliContext, dir: PathBuf) -> Result<(), String> {
    if !dir.is_dir() {
        return Err(format!("{} is not a directory", dir.display()));
    }

    let session = ctx.start_session();

    // Follow the newest existing file right away, if there is one
    match core_watcher::newest_log_file(&dir).map_err(|e| e.to_string())? {
        Some(path) => start_tail(ctx, &session, path),
        None => println!("No log files yet in {}", dir.display()),
    }

    let mut watcher = DirectoryWatcher::new(&dir).map_err(|e| e.to_string())?;
    println!("Watching directory: {} (Ctrl-C to stop)", dir.display());

    while let Some(event) = watcher.next_event().await {
        handle_watcher_event(ctx, &session, &dir, event);
    }

    ctx.tasks.abort_all().await;
    Ok(())
}

fn handle_watcher_event(
    ctx: &mut CliContext,
    session: &SessionHandle,
    dir: &Path,
    event: DirectoryEvent,
) {
    match event {
        DirectoryEvent::NewFile(path) => {
            println!("New log file detected: {}", path.display());
            start_tail(ctx, session, path);
        }

        DirectoryEvent::FileRemoved(path) => {
            if ctx.active_file.as_deref() != Some(path.as_path()) {
                return;
            }

            println!("Active file removed: {}", path.display());
            ctx.tasks.abort_tail();
            ctx.active_file = None;

            // Fall back to the next-newest file, if any survived
            if let Ok(Some(next)) = core_watcher::newest_log_file(dir) {
                start_tail(ctx, session, next);
            }
        }

        DirectoryEvent::Message(msg) => println!("{msg}"),
        DirectoryEvent::Error(err) => println!("Error: {err}"),
    }
}

fn start_tail(ctx: &mut CliContext, session: &SessionHandle, path: PathBuf) {
    // Stop any current tailing task
    ctx.tasks.abort_tail();

    println!("Beginning file tail: {}", path.display());
    let reader = LineReader::from(path.clone(), Arc::clone(session));
    ctx.active_file = Some(path);
    ctx.tasks.log_tail = Some(tokio::spawn(async move {
        let mut sweep = None;
        if let Err(err) = reader.tail(&mut sweep).await {
            tracing::warn!(error = %err, "Tail stopped");
        }
        if let Some(handle) = sweep {
            handle.abort();
        }
    }));
}

async fn print_active_timers(session: &SessionHandle) {
    let now = Local::now().naive_local();
    let session = session.read().await;
    let timers = session.tracker.snapshot(now);

    if timers.is_empty() {
        println!("No active timers");
        return;
    }

    println!(
        "{:<24} {:<20} {:>9} {:>5}",
        "Skill", "Caster", "Remaining", "Fill"
    );
    println!("{}", "-".repeat(62));
    for timer in &timers {
        println!(
            "{:<24} {:<20} {:>9} {:>4.0}%",
            timer.skill_name,
            timer.caster_name,
            timer.format_remaining(now),
            timer.progress(now) * 100.0
        );
    }
}
