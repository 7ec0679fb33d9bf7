use lumen_image::Image;
use lumen_imgproc::{histogram, operation::Operation};

use crate::{config::EditorConfig, error::EditorError, history::History};

/// The slider driven operations that can be previewed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    /// Box blur, the window size is `2 * level + 1`.
    Blur,
    /// Laplacian sharpening, the strength is `level / 10`.
    Sharpen,
}

impl PreviewKind {
    /// The operation a slider level maps to.
    pub fn operation(&self, level: u8) -> Operation {
        match self {
            PreviewKind::Blur => Operation::Blur(2 * level as usize + 1),
            PreviewKind::Sharpen => Operation::Sharpen(level as f64 / 10.0),
        }
    }
}

#[derive(Clone, Debug)]
struct Preview<const C: usize> {
    kind: PreviewKind,
    base: Image<u8, C>,
}

/// An editing session over an image with `C` channels.
///
/// Operations run on the intensity channel selected by
/// [`EditorConfig::intensity_channel`]; the other channels are carried along
/// untouched. Every change pushes the previous image on an undo history.
///
/// # Example
///
/// ```
/// use lumen_editor::{EditorConfig, EditorSession};
/// use lumen_image::{Image, ImageSize};
/// use lumen_imgproc::operation::Operation;
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 4, height: 4 }, 100).unwrap();
/// let mut session = EditorSession::new(image, EditorConfig::default()).unwrap();
///
/// session.apply(Operation::Invert).unwrap();
/// assert_eq!(session.current().get([0, 0, 2]), Some(&155));
/// assert_eq!(session.current().get([0, 0, 0]), Some(&100));
///
/// assert!(session.undo());
/// assert_eq!(session.current(), session.original());
/// ```
#[derive(Clone, Debug)]
pub struct EditorSession<const C: usize> {
    config: EditorConfig,
    original: Image<u8, C>,
    current: Image<u8, C>,
    history: History<Image<u8, C>>,
    preview: Option<Preview<C>>,
}

impl<const C: usize> EditorSession<C> {
    /// Start a session on an image.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or its intensity
    /// channel does not exist in the image.
    pub fn new(image: Image<u8, C>, config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;

        if config.intensity_channel >= C {
            return Err(EditorError::ChannelOutOfRange(config.intensity_channel, C));
        }

        log::debug!("new editing session on a {} image", image.size());

        Ok(Self {
            history: History::new(config.history_limit),
            original: image.clone(),
            current: image,
            preview: None,
            config,
        })
    }

    /// The session configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The image as it was when the session started.
    pub fn original(&self) -> &Image<u8, C> {
        &self.original
    }

    /// The image with every applied operation.
    pub fn current(&self) -> &Image<u8, C> {
        &self.current
    }

    /// Consume the session and return the current image.
    pub fn into_image(self) -> Image<u8, C> {
        self.current
    }

    /// A copy of the current intensity plane.
    pub fn intensity(&self) -> Result<Image<u8, 1>, EditorError> {
        Ok(self.current.channel(self.config.intensity_channel)?)
    }

    /// The 256 bucket histogram of the current intensity plane.
    pub fn histogram(&self) -> Result<[usize; 256], EditorError> {
        let mut hist = [0usize; 256];
        histogram::compute_histogram(&self.intensity()?, &mut hist, 256)?;
        Ok(hist)
    }

    /// Whether there is a snapshot to go back to.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether a blur or sharpen preview is in progress.
    pub fn previewing(&self) -> Option<PreviewKind> {
        self.preview.as_ref().map(|preview| preview.kind)
    }

    /// Apply an operation to the intensity channel of the current image.
    ///
    /// Ends any preview in progress, keeping its result.
    pub fn apply(&mut self, op: Operation) -> Result<(), EditorError> {
        op.validate()?;

        let next = self.transform(&self.current, op)?;
        log::debug!("applied {}", op.name());

        self.preview = None;
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);

        Ok(())
    }

    /// Apply a gamma correction, accepting gammas in `(0, max_gamma]`.
    pub fn apply_gamma(&mut self, gamma: f64) -> Result<(), EditorError> {
        if !(gamma > 0.0 && gamma <= self.config.max_gamma) {
            return Err(EditorError::GammaOutOfRange(gamma, self.config.max_gamma));
        }
        self.apply(Operation::Gamma(gamma))
    }

    /// Preview a blur at a slider level, see [`EditorSession::preview`].
    pub fn preview_blur(&mut self, level: u8) -> Result<(), EditorError> {
        self.preview(PreviewKind::Blur, level)
    }

    /// Preview a sharpen at a slider level, see [`EditorSession::preview`].
    pub fn preview_sharpen(&mut self, level: u8) -> Result<(), EditorError> {
        self.preview(PreviewKind::Sharpen, level)
    }

    /// Show the result of a slider driven operation.
    ///
    /// Successive previews of the same kind are computed from the image as it
    /// was before the first one, so moving a slider back and forth does not
    /// compound the effect. Level 0 shows that image unchanged. Starting a new
    /// kind of preview, or applying any operation, keeps the current result.
    ///
    /// The image before the preview is pushed once on the undo history.
    pub fn preview(&mut self, kind: PreviewKind, level: u8) -> Result<(), EditorError> {
        if level > self.config.max_slider_level {
            return Err(EditorError::SliderOutOfRange(
                level,
                self.config.max_slider_level,
            ));
        }

        let continuing = self
            .preview
            .as_ref()
            .is_some_and(|preview| preview.kind == kind);

        if !continuing && level == 0 {
            return Ok(());
        }

        let base = match &self.preview {
            Some(preview) if continuing => preview.base.clone(),
            _ => self.current.clone(),
        };

        let next = if level == 0 {
            base.clone()
        } else {
            self.transform(&base, kind.operation(level))?
        };
        log::debug!("preview {:?} at level {}", kind, level);

        if !continuing {
            self.history.push(self.current.clone());
            self.preview = Some(Preview { kind, base });
        }
        self.current = next;

        Ok(())
    }

    /// Go back to the image before the last change.
    ///
    /// Returns `false` if the history is empty.
    pub fn undo(&mut self) -> bool {
        self.preview = None;
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                log::info!("undo, {} snapshots left", self.history.len());
                true
            }
            None => {
                log::warn!("nothing to undo");
                false
            }
        }
    }

    /// Go back to the original image and forget the history.
    pub fn undo_all(&mut self) {
        self.preview = None;
        self.history.clear();
        self.current = self.original.clone();
        log::info!("restored the original image");
    }

    fn transform(&self, image: &Image<u8, C>, op: Operation) -> Result<Image<u8, C>, EditorError> {
        let channel = self.config.intensity_channel;
        let plane = image.channel(channel)?;
        let processed = op.apply(&plane)?;

        let mut next = image.clone();
        next.set_channel(channel, &processed)?;

        Ok(next)
    }
}
