use crate::api::models::UserStats;
use crate::cli::StatsArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::page::details;
use crate::resolve;

pub async fn run(ctx: &AppContext, args: StatsArgs) -> AppResult<()> {
    let backend = ctx.backend()?;
    let id = resolve::resolve(&backend, &args.id).await?;
    // Absent stats degrade to zeros, never to a failure.
    let stats = backend.fetch_stats_by_id(&id).await?.unwrap_or_default();

    ctx.output.emit(&format_stats_text(&stats), &stats)
}

fn format_stats_text(stats: &UserStats) -> String {
    format!(
        "started tests: {}\ncompleted tests: {}\ntime typing: {}",
        stats.started_tests,
        stats.completed_tests,
        details::format_time_typing(stats.time_typing),
    )
}
