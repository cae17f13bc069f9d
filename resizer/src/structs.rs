use std::str::FromStr;

use anyhow::{anyhow, Context};
use pixel_resample as pr;

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Algorithm {
    /// Copy of the nearest source pixel. Fastest, supports upscaling.
    Nearest,
    /// Average of source pixels weighted by the covered area.
    /// Downscaling only.
    Area,
    /// Bilinear interpolation.
    Bilinear,
}

impl From<Algorithm> for pr::ResizeAlg {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => pr::ResizeAlg::Nearest,
            Algorithm::Area => pr::ResizeAlg::Area,
            Algorithm::Bilinear => pr::ResizeAlg::Bilinear,
        }
    }
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Subsampling {
    #[value(name = "444")]
    S444,
    #[value(name = "422")]
    S422,
    #[value(name = "420")]
    S420,
    #[value(name = "440")]
    S440,
    #[value(name = "411")]
    S411,
}

impl From<Subsampling> for pr::codec::Subsampling {
    fn from(subsampling: Subsampling) -> Self {
        match subsampling {
            Subsampling::S444 => pr::codec::Subsampling::S444,
            Subsampling::S422 => pr::codec::Subsampling::S422,
            Subsampling::S420 => pr::codec::Subsampling::S420,
            Subsampling::S440 => pr::codec::Subsampling::S440,
            Subsampling::S411 => pr::codec::Subsampling::S411,
        }
    }
}

/// Size in pixels or in percents of the size of source image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Size {
    Pixels(u32),
    Percent(f32),
}

impl Size {
    pub fn calculate_size(&self, src_size: u32) -> u32 {
        match *self {
            Self::Pixels(size) => size,
            Self::Percent(percent) => (src_size as f32 * percent / 100.).round() as u32,
        }
    }
}

impl FromStr for Size {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(percent) = s.strip_suffix('%') {
            let percent: f32 = percent
                .trim()
                .parse()
                .with_context(|| format!("Invalid percentage: {:?}", s))?;
            Ok(Self::Percent(percent))
        } else {
            let pixels: u32 = s
                .trim()
                .parse()
                .with_context(|| format!("Invalid size: {:?}", s))?;
            Ok(Self::Pixels(pixels))
        }
    }
}

/// Crop box in form `left,top,width,height`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Crop(pub pr::CropBox);

impl FromStr for Crop {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Invalid crop box: {:?}", s))?;
        match values[..] {
            [left, top, width, height] => Ok(Self(pr::CropBox::new(left, top, width, height))),
            _ => Err(anyhow!(
                "Crop box must have four values \"left,top,width,height\", got {:?}",
                s
            )),
        }
    }
}

/// Decoding scale factor in form `num/denom`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scale {
    pub num: u32,
    pub denom: u32,
}

impl FromStr for Scale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, denom) = s
            .split_once('/')
            .ok_or_else(|| anyhow!("Scale must be in form \"num/denom\", got {:?}", s))?;
        Ok(Self {
            num: num.trim().parse().with_context(|| format!("Invalid scale: {:?}", s))?,
            denom: denom
                .trim()
                .parse()
                .with_context(|| format!("Invalid scale: {:?}", s))?,
        })
    }
}
