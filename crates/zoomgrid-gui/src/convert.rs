use image::RgbImage;

/// Convert a rendered RGB buffer to an egui ColorImage.
pub fn rgb_to_color_image(img: &RgbImage) -> egui::ColorImage {
    let (w, h) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| egui::Color32::from_rgb(p[0], p[1], p[2]))
        .collect();

    egui::ColorImage {
        size: [w as usize, h as usize],
        pixels,
        source_size: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_order_row_major() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(1, 0, image::Rgb([10, 20, 30]));
        let c = rgb_to_color_image(&img);
        assert_eq!(c.size, [2, 2]);
        assert_eq!(c.pixels[1], egui::Color32::from_rgb(10, 20, 30));
        assert_eq!(c.pixels[2], egui::Color32::BLACK);
    }
}
