use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::qr::dtos::GenerateQrDto;
use crate::shared::constants::QR_MIN_DIMENSION;

/// Renders URLs as PNG QR codes
#[derive(Debug, Default)]
pub struct QrService;

impl QrService {
    pub fn new() -> Self {
        Self
    }

    /// Encode the URL and return PNG bytes, at least `QR_MIN_DIMENSION` square
    pub fn generate_png(&self, dto: &GenerateQrDto) -> Result<Vec<u8>> {
        dto.validate()?;

        let code = QrCode::new(dto.url.trim().as_bytes())
            .map_err(|e| AppError::Internal(format!("Failed to encode QR code: {}", e)))?;

        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(QR_MIN_DIMENSION, QR_MIN_DIMENSION)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| AppError::Internal(format!("Failed to encode PNG: {}", e)))?;

        Ok(png)
    }
}
