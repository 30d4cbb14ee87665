use crate::engine::Outcome;
use crate::model::Badge;
use crate::error::{QuizError, Result};
use chrono::{Local, NaiveDate};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::utils::calculate_points_for_circle;
use printpdf::*;

pub const COURSE_NAME: &str = "Fundamentals of Web Development";

const DESCRIPTION: &str = "This certificate is proudly presented to certify that the learner has \
successfully completed the course 'Fundamentals of Web Development'. Through this course, the \
learner has gained essential knowledge of HTML structure, CSS styling fundamentals, and the basic \
concepts required to build modern, responsive web pages.";

const CONGRATS: &str = "Congratulations on completing this course! Your dedication and effort \
have resulted in a strong foundation in web development. This achievement marks an important \
step in your journey as a future web developer.";

// A4 landscape, in millimetres.
const PAGE_W: f32 = 297.0;
const PAGE_H: f32 = 210.0;

const INK: [u8; 3] = [30, 41, 59];
const MUTED: [u8; 3] = [100, 116, 139];
const BODY: [u8; 3] = [71, 85, 105];
const RULE: [u8; 3] = [226, 232, 240];
const FAINT: [u8; 3] = [148, 163, 184];
const WHITE: [u8; 3] = [255, 255, 255];

// Average Helvetica advance as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;
const PT_TO_MM: f32 = 0.3528;

/// Everything the certificate needs. Built from an [`Outcome`]; it formats
/// and draws, it never scores.
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    pub user_name: String,
    pub core_score: u32,
    pub bonus_score: u32,
    pub badge: Badge,
    pub passed: bool,
    pub mastery: bool,
    pub issued_on: NaiveDate,
}

impl Certificate {
    pub fn new(user_name: &str, outcome: &Outcome, issued_on: NaiveDate) -> Self {
        Self {
            user_name: user_name.to_string(),
            core_score: outcome.core_score,
            bonus_score: outcome.bonus_score,
            badge: outcome.badge.clone(),
            passed: outcome.passed,
            mastery: outcome.mastery,
            issued_on,
        }
    }

    pub fn issued_today(user_name: &str, outcome: &Outcome) -> Self {
        Self::new(user_name, outcome, Local::now().date_naive())
    }

    pub fn file_name(&self) -> String {
        let name = self.user_name.split_whitespace().collect::<Vec<_>>().join("_");
        format!("Fundamentals_WebDev_Certificate_{name}.pdf")
    }

    pub fn status(&self) -> &'static str {
        if self.mastery {
            "Completed with Mastery"
        } else if self.passed {
            "Successfully Completed"
        } else {
            "Attempted"
        }
    }

    pub fn date_label(&self) -> String {
        self.issued_on.format("%B %-d, %Y").to_string()
    }

    /// Label/value rows of the details block. The bonus row only shows up
    /// when at least one challenge was solved.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("COURSE:", COURSE_NAME.to_string()),
            ("BADGE:", self.badge.title.clone()),
            ("STATUS:", self.status().to_string()),
            ("DATE:", self.date_label()),
        ];
        if self.bonus_score > 0 {
            rows.insert(2, ("BONUS:", format!("{} challenges", self.bonus_score)));
        }
        rows
    }

    /// Renders the certificate as a one-page A4 landscape PDF.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            format!("{COURSE_NAME} - {}", self.user_name),
            Mm(PAGE_W),
            Mm(PAGE_H),
            "Certificate".to_string(),
        );
        let fonts = Fonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?,
            italic: doc.add_builtin_font(BuiltinFont::HelveticaOblique).map_err(pdf_error)?,
            signature: doc.add_builtin_font(BuiltinFont::TimesItalic).map_err(pdf_error)?,
        };
        let page = Page {
            layer: doc.get_page(page).get_layer(layer),
        };
        self.draw(&page, &fonts);
        doc.save_to_bytes().map_err(pdf_error)
    }

    fn draw(&self, page: &Page, fonts: &Fonts) {
        let color = self.badge.color;
        let center = PAGE_W / 2.0;

        // borders
        page.frame(8.0, color, 4.0);
        page.frame(13.0, [241, 245, 249], 1.0);

        // medal
        let (medal_x, medal_y) = (PAGE_W - 45.0, 35.0);
        page.disc(medal_x, medal_y, 15.0, color);
        page.ring(medal_x, medal_y, 13.0, WHITE, 0.5);
        let tier = self.badge.tier.to_string().to_uppercase();
        page.centered(&tier, 8.0, medal_x, medal_y - 2.0, &fonts.bold, WHITE);
        page.centered(&self.core_score.to_string(), 14.0, medal_x, medal_y + 4.0, &fonts.bold, WHITE);

        page.centered("CERTIFICATE", 42.0, center, 45.0, &fonts.bold, INK);
        page.centered("OF COMPLETION", 22.0, center, 55.0, &fonts.regular, INK);
        page.centered("This certificate is proudly presented to", 14.0, center, 75.0, &fonts.regular, MUTED);
        page.centered(&self.user_name, 36.0, center, 92.0, &fonts.bold, color);
        page.rule(center - 60.0, center + 60.0, 98.0, RULE, 0.5);

        page.paragraph(DESCRIPTION, 11.0, center, 112.0, 95, &fonts.regular, BODY);
        page.paragraph(CONGRATS, 11.0, center, 135.0, 80, &fonts.italic, BODY);

        for (row, (label, value)) in self.details().iter().enumerate() {
            let y = 160.0 + row as f32 * 6.0;
            page.left(label, 10.0, 40.0, y, &fonts.bold, INK);
            page.left(value, 10.0, 80.0, y, &fonts.regular, INK);
        }

        page.centered(&format!("\"{}\"", self.badge.quote), 15.0, center, 195.0, &fonts.bold, color);

        // signature block
        page.centered("AKafiq", 24.0, 215.0, 168.0, &fonts.signature, INK);
        page.rule(185.0, 245.0, 172.0, FAINT, 0.5);
        page.centered("IN-SYSTEM VERIFICATION", 9.0, 215.0, 178.0, &fonts.bold, FAINT);
    }

    /// Writes the PDF into `dir` under [`Certificate::file_name`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_in(&self, dir: &std::path::Path) -> Result<std::path::PathBuf> {
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.to_pdf()?)?;
        log::info!("Certificate saved to {}", path.display());
        Ok(path)
    }

    /// Hands the PDF to the browser as a file download.
    #[cfg(target_arch = "wasm32")]
    pub fn download_in_browser(&self) -> Result<()> {
        use wasm_bindgen::JsCast as _;

        let bytes = self.to_pdf()?;
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/pdf");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(browser_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser_error)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| QuizError::Browser("no document".into()))?;
        let anchor = document
            .create_element("a")
            .map_err(browser_error)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| QuizError::Browser("<a> is not an anchor element".into()))?;
        anchor.set_href(&url);
        anchor.set_download(&self.file_name());
        anchor.click();

        web_sys::Url::revoke_object_url(&url).map_err(browser_error)?;
        log::info!("Certificate download started: {}", self.file_name());
        Ok(())
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    signature: IndirectFontRef,
}

/// Drawing helpers over one PDF layer. Coordinates are millimetres from the
/// top-left corner; PDF itself counts from the bottom.
struct Page {
    layer: PdfLayerReference,
}

impl Page {
    fn point(x: f32, y: f32) -> (Point, bool) {
        (Point::new(Mm(x), Mm(PAGE_H - y)), false)
    }

    fn fill(&self, color: [u8; 3]) {
        self.layer.set_fill_color(pdf_color(color));
    }

    fn stroke(&self, color: [u8; 3], width_pt: f32) {
        self.layer.set_outline_color(pdf_color(color));
        self.layer.set_outline_thickness(width_pt);
    }

    fn frame(&self, inset: f32, color: [u8; 3], width_pt: f32) {
        self.stroke(color, width_pt);
        let (left, top, right, bottom) = (inset, inset, PAGE_W - inset, PAGE_H - inset);
        self.layer.add_line(Line {
            points: vec![
                Self::point(left, top),
                Self::point(right, top),
                Self::point(right, bottom),
                Self::point(left, bottom),
            ],
            is_closed: true,
        });
    }

    fn rule(&self, x1: f32, x2: f32, y: f32, color: [u8; 3], width_pt: f32) {
        self.stroke(color, width_pt);
        self.layer.add_line(Line {
            points: vec![Self::point(x1, y), Self::point(x2, y)],
            is_closed: false,
        });
    }

    fn circle_points(cx: f32, cy: f32, r: f32) -> Vec<(Point, bool)> {
        calculate_points_for_circle(Mm(r), Mm(cx), Mm(PAGE_H - cy))
    }

    fn disc(&self, cx: f32, cy: f32, r: f32, color: [u8; 3]) {
        self.fill(color);
        self.layer.add_polygon(Polygon {
            rings: vec![Self::circle_points(cx, cy, r)],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn ring(&self, cx: f32, cy: f32, r: f32, color: [u8; 3], width_pt: f32) {
        self.stroke(color, width_pt);
        self.layer.add_line(Line {
            points: Self::circle_points(cx, cy, r),
            is_closed: true,
        });
    }

    fn left(&self, content: &str, size: f32, x: f32, y: f32, font: &IndirectFontRef, color: [u8; 3]) {
        self.fill(color);
        self.layer.use_text(content, size, Mm(x), Mm(PAGE_H - y), font);
    }

    fn centered(&self, content: &str, size: f32, cx: f32, y: f32, font: &IndirectFontRef, color: [u8; 3]) {
        let x = cx - text_width(content, size) / 2.0;
        self.left(content, size, x, y, font, color);
    }

    #[allow(clippy::too_many_arguments)]
    fn paragraph(
        &self,
        content: &str,
        size: f32,
        cx: f32,
        y: f32,
        max_chars: usize,
        font: &IndirectFontRef,
        color: [u8; 3],
    ) {
        let line_height = size * PT_TO_MM * 1.4;
        for (i, line) in wrap_words(content, max_chars).iter().enumerate() {
            self.centered(line, size, cx, y + i as f32 * line_height, font, color);
        }
    }
}

fn pdf_color([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn pdf_error(e: impl std::fmt::Debug) -> QuizError {
    QuizError::Pdf(format!("{e:?}"))
}

#[cfg(target_arch = "wasm32")]
fn browser_error(e: wasm_bindgen::JsValue) -> QuizError {
    QuizError::Browser(format!("{e:?}"))
}

/// Estimated rendered width in millimetres. The builtin fonts carry no
/// metrics, so centring works from an average glyph width.
fn text_width(content: &str, size: f32) -> f32 {
    content.chars().count() as f32 * size * AVG_GLYPH_WIDTH * PT_TO_MM
}

fn wrap_words(content: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_badges_embedded;
    use crate::engine::Outcome;

    fn certificate(name: &str, core: u32, bonus: u32) -> Certificate {
        let catalog = read_badges_embedded().expect("badges");
        let outcome = Outcome::resolve(core, bonus, &catalog);
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).expect("date");
        Certificate::new(name, &outcome, date)
    }

    #[test]
    fn file_name_is_a_pdf_with_collapsed_whitespace() {
        let cert = certificate("Ada   Lovelace King", 9, 0);
        assert_eq!(
            cert.file_name(),
            "Fundamentals_WebDev_Certificate_Ada_Lovelace_King.pdf"
        );
        assert_eq!(
            certificate("Ada Lovelace", 9, 0).file_name(),
            "Fundamentals_WebDev_Certificate_Ada_Lovelace.pdf"
        );
    }

    #[test]
    fn carries_outcome_without_rescoring() {
        let cert = certificate("Ada", 10, 5);
        assert_eq!(cert.core_score, 10);
        assert_eq!(cert.bonus_score, 5);
        assert!(cert.passed && cert.mastery);
        assert_eq!(cert.status(), "Completed with Mastery");
        assert_eq!(cert.date_label(), "October 19, 2026");
    }

    #[test]
    fn renders_a_pdf_document() {
        let bytes = certificate("Ada Lovelace", 9, 0).to_pdf().expect("pdf");
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(32)..]).to_string();
        assert!(tail.contains("%%EOF"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn save_in_writes_the_named_pdf() {
        let cert = certificate("Grace Hopper", 10, 5);
        let path = cert.save_in(&std::env::temp_dir()).expect("saved");
        assert!(path.ends_with("Fundamentals_WebDev_Certificate_Grace_Hopper.pdf"));
        let bytes = std::fs::read(&path).expect("read back");
        assert!(bytes.starts_with(b"%PDF-"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn bonus_row_only_when_challenges_solved() {
        let plain = certificate("Ada", 8, 0);
        let labels: Vec<_> = plain.details().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["COURSE:", "BADGE:", "STATUS:", "DATE:"]);
        assert_eq!(plain.details()[1].1, "Web Foundations Explorer");

        let bonus = certificate("Ada", 10, 3);
        assert_eq!(bonus.details()[2], ("BONUS:", "3 challenges".to_string()));
    }

    #[test]
    fn centred_text_width_scales_with_size() {
        assert_eq!(text_width("", 12.0), 0.0);
        assert!(text_width("CERTIFICATE", 42.0) > text_width("CERTIFICATE", 22.0));
        assert!(text_width("CERTIFICATE", 42.0) < PAGE_W);
    }

    #[test]
    fn wrap_words_respects_width() {
        let lines = wrap_words(DESCRIPTION, 40);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 40));
        assert_eq!(lines.join(" "), DESCRIPTION.split_whitespace().collect::<Vec<_>>().join(" "));
    }
}
