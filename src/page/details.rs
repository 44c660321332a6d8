use html_escape::{encode_double_quoted_attribute, encode_text};

use super::banner::{self, BannerProps, ImageProps};
use crate::api::models::{AvatarShape, UserRecord, UserStats};

/// Details view: banner, avatar, name, aggregate stats.
pub fn render(user: &UserRecord, stats: &UserStats) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"user-details\">\n");
    out.push_str(&banner::render(&BannerProps {
        image: ImageProps {
            src: user.banner_url.clone(),
            alt: None,
        },
        class: Some("profile-banner".to_string()),
    }));
    out.push_str(&render_avatar(user));
    out.push_str(&format!(
        "<h1 class=\"user-name\">{}</h1>\n",
        encode_text(&user.name)
    ));
    out.push_str(&render_stats(stats));
    out.push_str("</section>\n");
    out
}

fn render_avatar(user: &UserRecord) -> String {
    let shape_class = match user.avatar_shape.unwrap_or(AvatarShape::Circle) {
        AvatarShape::Circle => "avatar-circle",
        AvatarShape::Rect => "avatar-rect",
    };

    match &user.avatar_url {
        Some(src) => format!(
            "<img class=\"avatar {shape_class}\" src=\"{}\" alt=\"{}\">\n",
            encode_double_quoted_attribute(src),
            encode_double_quoted_attribute(&user.name),
        ),
        None => format!("<div class=\"avatar {shape_class} avatar-empty\"></div>\n"),
    }
}

fn render_stats(stats: &UserStats) -> String {
    format!(
        "<dl class=\"user-stats\">\
         <dt>started tests</dt><dd>{}</dd>\
         <dt>completed tests</dt><dd>{}</dd>\
         <dt>time typing</dt><dd>{}</dd>\
         </dl>\n",
        stats.started_tests,
        stats.completed_tests,
        format_time_typing(stats.time_typing),
    )
}

pub fn format_time_typing(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m {secs:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs:02}s")
    } else {
        format!("{secs}s")
    }
}
