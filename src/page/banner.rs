use html_escape::encode_double_quoted_attribute;

const PLACEHOLDER_HEIGHT_PX: u32 = 156;

/// Props for the profile banner region.
#[derive(Debug, Clone, Default)]
pub struct BannerProps {
    pub image: ImageProps,
    /// Extra classes forwarded to the container element.
    pub class: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ImageProps {
    pub src: Option<String>,
    pub alt: Option<String>,
}

/// Stateless banner view. With an image URL: a 4:1 region holding an
/// eagerly loaded, fill-sized image. Without: a fixed-height region with a
/// translucent fill and no image element at all.
pub fn render(props: &BannerProps) -> String {
    let mut classes = String::from("banner");
    if props.image.src.is_none() {
        classes.push_str(" banner-placeholder");
    }
    if let Some(extra) = &props.class {
        classes.push(' ');
        classes.push_str(extra);
    }
    let classes = encode_double_quoted_attribute(&classes).into_owned();

    match &props.image.src {
        Some(src) => {
            let alt = props.image.alt.as_deref().unwrap_or("Banner");
            format!(
                "<div class=\"{classes}\" style=\"aspect-ratio:4/1\">\
                 <img src=\"{src}\" alt=\"{alt}\" loading=\"eager\" fetchpriority=\"high\" \
                 style=\"width:100%;height:100%;object-fit:cover\">\
                 </div>\n",
                src = encode_double_quoted_attribute(src),
                alt = encode_double_quoted_attribute(alt),
            )
        }
        None => format!(
            "<div class=\"{classes}\" \
             style=\"height:{PLACEHOLDER_HEIGHT_PX}px;background:rgba(0,0,0,0.15)\"></div>\n"
        ),
    }
}
