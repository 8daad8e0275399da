use ddsfile::{AlphaMode, D3D10ResourceDimension, Dds, DxgiFormat, NewDxgiParams};
use std::io::Write;

/// Writes tightly packed 8-bit RGBA pixels as a single-mip DDS texture.
pub fn write_rgba8_dds<W: Write>(
    writer: &mut W,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
) -> Result<(), ddsfile::Error> {
    let params = NewDxgiParams {
        height,
        width,
        depth: None,
        format: DxgiFormat::R8G8B8A8_UNorm,
        mipmap_levels: Some(1),
        array_layers: Some(1),
        caps2: None,
        is_cubemap: false,
        resource_dimension: D3D10ResourceDimension::Texture2D,
        alpha_mode: AlphaMode::Straight,
    };

    let mut dds = Dds::new_dxgi(params)?;
    dds.data = pixels;
    dds.write(writer)?;
    Ok(())
}
