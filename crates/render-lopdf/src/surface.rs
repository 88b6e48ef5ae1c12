use std::collections::HashMap;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use rollbook_render_core::utils::{cell_baseline, flip_y, mm_to_pt};
use rollbook_render_core::{
    EncodedImage, FontWeight, HAlign, ImageInfo, RenderError, StandardFont, Surface,
};
use rollbook_types::{Color, Point, Rect, Size};

use crate::content::PageContent;

const DEFAULT_LINE_WIDTH_MM: f32 = 0.2;

struct RegisteredImage {
    resource_name: String,
    image: EncodedImage,
}

/// A `Surface` that buffers page content and writes a PDF in `finish`.
///
/// Text uses the standard Helvetica faces with WinAnsiEncoding, so callers
/// should pass Latin-1 text.
pub struct LopdfSurface {
    size: Size,
    pages: Vec<PageContent>,
    font: StandardFont,
    font_size: f32,
    line_width: f32,
    images: HashMap<String, RegisteredImage>,
    title: Option<String>,
}

impl LopdfSurface {
    /// `size` is the page size in millimetres.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pages: Vec::new(),
            font: StandardFont::Helvetica,
            font_size: 12.0,
            line_width: DEFAULT_LINE_WIDTH_MM,
            images: HashMap::new(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn page_height_pt(&self) -> f32 {
        mm_to_pt(self.size.height)
    }

    fn current_page(&mut self) -> Result<&mut PageContent, RenderError> {
        self.pages.last_mut().ok_or(RenderError::NoPage)
    }

    fn font_dictionary() -> Dictionary {
        let mut fonts = Dictionary::new();
        for font in [StandardFont::Helvetica, StandardFont::HelveticaBold] {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            };
            fonts.set(font.resource_name().as_bytes(), Object::Dictionary(single_font_dict));
        }
        fonts
    }

    fn build_document(self) -> Result<Document, RenderError> {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();

        let mut xobjects = Dictionary::new();
        let mut names: Vec<_> = self.images.values().collect();
        names.sort_by(|a, b| a.resource_name.cmp(&b.resource_name));
        for registered in names {
            let image = &registered.image;
            let stream = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => i64::from(image.width_px),
                    "Height" => i64::from(image.height_px),
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                    "Filter" => "DCTDecode",
                },
                image.data.clone(),
            );
            let image_id = document.add_object(stream);
            xobjects.set(registered.resource_name.as_bytes(), image_id);
        }

        let mut resources = dictionary! {
            "Font" => Self::font_dictionary(),
        };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        let resources_id = document.add_object(resources);

        let width_pt = mm_to_pt(self.size.width);
        let height_pt = mm_to_pt(self.size.height);
        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(self.pages.len());
        for page in self.pages {
            let content = page.finish();
            let encoded = content
                .encode()
                .map_err(|e| RenderError::Pdf(e.to_string()))?;
            let content_id = document.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width_pt.into(), height_pt.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::from(*id)).collect();
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_ids.len() as i64,
            }),
        );

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        if let Some(title) = self.title {
            let info_id = document.add_object(dictionary! {
                "Title" => Object::string_literal(title),
                "Producer" => Object::string_literal("rollbook"),
            });
            document.trailer.set("Info", info_id);
        }

        Ok(document)
    }
}

impl Surface for LopdfSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn add_page(&mut self) {
        self.pages.push(PageContent::new());
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_font(&mut self, _family: &str, weight: FontWeight, size_pt: f32) {
        self.font = StandardFont::for_weight(weight);
        self.font_size = size_pt;
    }

    fn set_font_size(&mut self, size_pt: f32) {
        self.font_size = size_pt;
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn string_width(&self, text: &str) -> f32 {
        self.font.string_width(text, self.font_size)
    }

    fn line_width(&self) -> f32 {
        self.line_width
    }

    fn cell(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        text: &str,
        align: HAlign,
    ) -> Result<(), RenderError> {
        let text_width = self.string_width(text);
        let x = match align {
            HAlign::Left => x,
            HAlign::Center => x + (w - text_width) / 2.0,
            HAlign::Right => x + w - text_width,
        };
        let baseline = cell_baseline(y, h, self.font_height());
        let page_height = self.page_height_pt();
        let (font, size) = (self.font, self.font_size);
        self.current_page()?.text(
            font,
            size,
            mm_to_pt(x),
            flip_y(mm_to_pt(baseline), page_height),
            text,
        );
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        let page_height = self.page_height_pt();
        self.current_page()?.fill_rect(
            mm_to_pt(rect.x),
            flip_y(mm_to_pt(rect.bottom()), page_height),
            mm_to_pt(rect.width),
            mm_to_pt(rect.height),
            color,
        );
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point) -> Result<(), RenderError> {
        let page_height = self.page_height_pt();
        let width = mm_to_pt(self.line_width);
        self.current_page()?.line(
            mm_to_pt(from.x),
            flip_y(mm_to_pt(from.y), page_height),
            mm_to_pt(to.x),
            flip_y(mm_to_pt(to.y), page_height),
            width,
        );
        Ok(())
    }

    fn register_image(&mut self, id: &str, image: EncodedImage) -> Result<(), RenderError> {
        if image.width_px == 0 || image.height_px == 0 || image.data.is_empty() {
            return Err(RenderError::InvalidImage {
                id: id.to_string(),
                message: "image has no pixels".to_string(),
            });
        }
        let resource_name = match self.images.get(id) {
            Some(existing) => existing.resource_name.clone(),
            None => format!("Im{}", self.images.len() + 1),
        };
        log::debug!(
            "Registered image '{}' as /{} ({}x{} px)",
            id,
            resource_name,
            image.width_px,
            image.height_px
        );
        self.images.insert(
            id.to_string(),
            RegisteredImage {
                resource_name,
                image,
            },
        );
        Ok(())
    }

    fn image_info(&self, id: &str) -> Option<ImageInfo> {
        self.images.get(id).map(|r| ImageInfo {
            width_px: r.image.width_px,
            height_px: r.image.height_px,
        })
    }

    fn draw_image(&mut self, id: &str, x: f32, y: f32, width: f32) -> Result<(), RenderError> {
        let (name, info) = match self.images.get(id) {
            Some(r) => (
                r.resource_name.clone(),
                ImageInfo {
                    width_px: r.image.width_px,
                    height_px: r.image.height_px,
                },
            ),
            None => return Err(RenderError::UnknownImage(id.to_string())),
        };
        let height = info.height_for_width(width);
        let page_height = self.page_height_pt();
        self.current_page()?.image(
            &name,
            mm_to_pt(x),
            flip_y(mm_to_pt(y + height), page_height),
            mm_to_pt(width),
            mm_to_pt(height),
        );
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        if self.pages.is_empty() {
            return Err(RenderError::NoPage);
        }
        let page_count = self.pages.len();
        let mut document = (*self).build_document()?;
        let mut bytes = Vec::new();
        document
            .save_to(&mut bytes)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        log::info!("Finished PDF with {} pages ({} bytes)", page_count, bytes.len());
        Ok(bytes)
    }
}
