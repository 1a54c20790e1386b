//! The HTML gallery page template

use crate::escape::{escape_html, nl2br, preview};
use crate::renderer::Renderer;
use crate::site::SiteProfile;
use crate::structured_data::StructuredData;
use chrono::Datelike;
use folio_model::{PictureRecord, Section, SectionMetadata};

/// Renders complete gallery pages.
///
/// Output depends only on the arguments, the [`SiteProfile`] and the
/// copyright year fixed at construction.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    site: SiteProfile,
    year: i32,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    /// Renderer for the production site, stamped with the current year
    #[must_use]
    pub fn new() -> Self {
        Self {
            site: SiteProfile::default(),
            year: chrono::Local::now().year(),
        }
    }

    /// Fix the copyright year
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Replace the site profile
    #[must_use]
    pub fn with_site(mut self, site: SiteProfile) -> Self {
        self.site = site;
        self
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub fn site(&self) -> &SiteProfile {
        &self.site
    }

    fn gallery_item(picture: &PictureRecord) -> String {
        let name = escape_html(&picture.name);
        let year = picture
            .year
            .as_deref()
            .filter(|y| !y.is_empty())
            .map(|y| format!(" ({})", escape_html(y)))
            .unwrap_or_default();

        let mut html = format!(
            r#"
                    <div class="gallery-item">
                        <div class="gallery-image-container">
                            <img src="{src}" alt="{name}" class="gallery-image">
                            <div class="gallery-overlay">
                                <button class="view-btn">View Full Size</button>
                            </div>
                        </div>
                        <div class="gallery-info">
                            <h3 class="gallery-title">{name}{year}</h3>
                            <p class="gallery-medium">{medium}</p>
                        </div>"#,
            src = escape_html(&picture.image_url),
            medium = escape_html(picture.medium.as_str()),
        );

        if let Some(notes) = picture.visible_notes() {
            let full = nl2br(&escape_html(notes));
            match preview(notes) {
                Some(short) => html.push_str(&format!(
                    r#"
                        <div class="gallery-notes">
                            <div class="notes-preview">
                                <p class="notes-text-preview">{short}</p>
                                <button class="expand-notes-btn">... read more</button>
                            </div>
                            <div class="notes-full" style="display: none;">
                                <p class="notes-text-full">{full}</p>
                                <button class="collapse-notes-btn">... read less</button>
                            </div>
                        </div>"#,
                    short = escape_html(&short),
                )),
                None => html.push_str(&format!(
                    r#"
                        <div class="gallery-notes">
                            <p class="notes-text-full">{full}</p>
                        </div>"#
                )),
            }
        }

        html.push_str(
            r#"
                    </div>"#,
        );
        html
    }

    fn gallery_items(pictures: &[PictureRecord]) -> String {
        if pictures.is_empty() {
            return r#"
                    <div class="empty-gallery">
                        <p class="empty-message">New artwork coming soon...</p>
                    </div>"#
                .to_string();
        }
        pictures.iter().map(Self::gallery_item).collect()
    }

    fn navigation(section_id: &str) -> String {
        Section::ALL
            .iter()
            .map(|section| {
                let active = if section.key() == section_id { " active" } else { "" };
                format!(
                    r#"                        <a href="{file}" class="submenu-link{active}">{label}</a>"#,
                    file = section.file_name(),
                    label = section.label(),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn description(metadata: &SectionMetadata) -> String {
        metadata
            .description
            .iter()
            .map(|para| format!("<p>{}</p>", escape_html(para)))
            .collect::<Vec<_>>()
            .join("\n                    ")
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, section_id: &str, pictures: &[PictureRecord], metadata: &SectionMetadata) -> String {
        let site = &self.site;
        let url = site.page_url(&format!("{section_id}.html"));
        let share_image = pictures
            .first()
            .map_or(site.fallback_image.as_str(), |p| p.image_url.as_str());

        let structured = StructuredData {
            site_name: &site.name,
            page_url: &url,
            year: self.year,
            metadata,
            pictures,
        }
        .to_script_json();

        let title = escape_html(&metadata.title);
        let og_description = escape_html(&metadata.og_description);
        let share_image = escape_html(share_image);
        let site_name = escape_html(&site.name);
        let url = escape_html(&url);

        let mut html = format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="Cache-Control" content="no-cache, no-store, must-revalidate">

    <!-- Primary Meta Tags -->
    <title>{title}</title>
    <meta name="title" content="{title}">
    <meta name="description" content="{og_description}">
    <meta name="keywords" content="{keywords}">
    <meta name="author" content="{site_name}">
    <meta name="robots" content="index, follow">
    <meta name="language" content="English">

    <link rel="canonical" href="{url}">

    <!-- Open Graph / Facebook -->
    <meta property="og:type" content="website">
    <meta property="og:url" content="{url}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{og_description}">
    <meta property="og:image" content="{share_image}">
    <meta property="og:site_name" content="{site_name}">

    <!-- Twitter -->
    <meta property="twitter:card" content="summary_large_image">
    <meta property="twitter:url" content="{url}">
    <meta property="twitter:title" content="{title}">
    <meta property="twitter:description" content="{og_description}">
    <meta property="twitter:image" content="{share_image}">

    <!-- Structured Data (JSON-LD) -->
    <script type="application/ld+json">
    {structured}
    </script>

    <link href="https://fonts.googleapis.com/css2?family=UnifrakturMaguntia&display=swap" rel="stylesheet">
    <link rel="stylesheet" href="styles.css?v={styles_version}">
    <link rel="stylesheet" href="gallery-styles.css?v={gallery_styles_version}">
</head>
<body>
    <header class="header">
        <div class="container header-container">
            <h1 class="logo">{site_name}</h1>
            <button class="menu-toggle" id="menuToggle">Menu</button>
            <nav class="nav" id="mainNav">
                <div class="nav-item">
                    <a href="index.html" class="nav-link">Home</a>
                </div>
                <div class="nav-item has-submenu">
                    <a href="#" class="nav-link">Gallery</a>
                    <div class="submenu">
{navigation}
                    </div>
                </div>
                <div class="nav-item">
                    <a href="index.html#about" class="nav-link">About the Artist</a>
                </div>
                <div class="nav-item">
                    <a href="index.html#contact" class="nav-link">Contact Me</a>
                </div>
            </nav>
        </div>
    </header>

    <main class="main">
        <section class="hero">
            <div class="container">
                <h2 class="hero-title">{hero_title}</h2>
                <p class="hero-subtitle">{hero_subtitle}</p>
            </div>
        </section>

        <section class="gallery">
            <div class="container">
                <h2 class="section-title">The Collection</h2>
                <div class="gallery-grid">
{items}
                </div>
            </div>
        </section>

        <section class="collection-description">
            <div class="container">
                <h2 class="section-title">About This Collection</h2>
                <div class="description-content">
{description}
                </div>
            </div>
        </section>

        <section class="copyright-notice">
            <div class="container">
                <p>All artwork is protected by copyright. Unauthorized reproduction or distribution is prohibited.</p>
                <p>For licensing inquiries: <a href="mailto:{email}">{email}</a></p>
            </div>
        </section>
    </main>

    <footer class="footer">
        <div class="container footer-content">
            <p class="footer-left">&copy; <span class="copyright-year">{year}</span> {site_name} | All Rights Reserved | <a href="terms-of-use.html" style="color: #00BFFF; font-weight: 600; text-decoration: underline; font-family: 'Lucida Sans Unicode', 'Lucida Grande', 'Lucida Sans', Arial, sans-serif;">Terms of Use</a></p>
            <p class="footer-right" style="font-family: 'Lucida Sans Unicode', 'Lucida Grande', 'Lucida Sans', Arial, sans-serif; color: #fff;">| A v I d Digital |</p>
        </div>
    </footer>
"##,
            keywords = escape_html(&metadata.keywords),
            styles_version = site.styles_version,
            gallery_styles_version = site.gallery_styles_version,
            navigation = Self::navigation(section_id),
            hero_title = escape_html(&metadata.hero_title),
            hero_subtitle = escape_html(&metadata.hero_subtitle),
            items = Self::gallery_items(pictures),
            description = Self::description(metadata),
            email = escape_html(&site.contact_email),
            year = self.year,
        );
        html.push_str(PAGE_SCRIPTS);
        html
    }
}

const PAGE_SCRIPTS: &str = r#"
    <script src="menu-script.js"></script>
    <script>
        // Auto-update copyright year
        document.querySelectorAll('.copyright-year').forEach(el => {
            el.textContent = new Date().getFullYear();
        });
    </script>
    <script src="protection.js"></script>
    <script src="canvas-protection.js"></script>
    <script>
        // Full size image viewer - handles both img and canvas elements
        document.querySelectorAll('.view-btn').forEach(btn => {
            btn.addEventListener('click', function() {
                const imageElement = this.closest('.gallery-item').querySelector('.gallery-image');
                const modal = document.createElement('div');
                modal.className = 'image-modal';

                let imageSrc;
                let imageAlt;

                if (imageElement.tagName === 'CANVAS') {
                    imageSrc = imageElement.dataset.originalSrc || imageElement.toDataURL('image/png');
                    imageAlt = imageElement.alt || imageElement.getAttribute('alt') || 'Artwork';
                } else {
                    imageSrc = imageElement.src;
                    imageAlt = imageElement.alt || 'Artwork';
                }

                modal.innerHTML = `
                    <button class="back-modal">Back</button>
                    <div class="modal-content">
                        <div class="modal-image-container">
                            <img src="${imageSrc}" alt="${imageAlt}" class="modal-image">
                        </div>
                    </div>
                `;
                document.body.appendChild(modal);

                modal.querySelector('.back-modal').addEventListener('click', () => {
                    document.body.removeChild(modal);
                });

                modal.addEventListener('click', (e) => {
                    if (e.target === modal) {
                        document.body.removeChild(modal);
                    }
                });
            });
        });

        // Expand/collapse notes
        document.querySelectorAll('.expand-notes-btn').forEach(btn => {
            btn.addEventListener('click', function() {
                const notes = this.closest('.gallery-notes');
                notes.querySelector('.notes-preview').style.display = 'none';
                notes.querySelector('.notes-full').style.display = 'block';
            });
        });

        document.querySelectorAll('.collapse-notes-btn').forEach(btn => {
            btn.addEventListener('click', function() {
                const notes = this.closest('.gallery-notes');
                notes.querySelector('.notes-preview').style.display = 'block';
                notes.querySelector('.notes-full').style.display = 'none';
            });
        });
    </script>
</body>
</html>"#;
