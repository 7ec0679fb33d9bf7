use lumen_editor::{EditorConfig, EditorError, EditorSession};
use lumen_image::{Image, ImageSize};
use lumen_imgproc::operation::Operation;

fn gradient_image() -> Result<Image<u8, 3>, EditorError> {
    let size = ImageSize {
        width: 8,
        height: 4,
    };
    let mut data = Vec::with_capacity(size.area() * 3);
    for row in 0..size.height {
        for col in 0..size.width {
            // hue and saturation stay constant, value ramps up
            data.extend_from_slice(&[30, 200, (row * 8 + col) as u8 * 8]);
        }
    }
    Ok(Image::new(size, data)?)
}

#[test]
fn editing_workflow() -> Result<(), EditorError> {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = EditorConfig {
        history_limit: Some(3),
        ..Default::default()
    };
    let mut session = EditorSession::new(gradient_image()?, config)?;

    session.apply(Operation::EqualizeHistogram)?;
    session.apply_gamma(0.5)?;
    session.preview_sharpen(4)?;
    session.preview_sharpen(8)?;
    session.apply(Operation::Log)?;

    // chrominance is never touched
    let channels = session.current().split_channels()?;
    assert!(channels[0].as_slice().iter().all(|&v| v == 30));
    assert!(channels[1].as_slice().iter().all(|&v| v == 200));

    // the limit keeps the last three snapshots only
    assert!(session.undo());
    assert!(session.undo());
    assert!(session.undo());
    assert!(!session.undo());
    assert_ne!(session.current(), session.original());

    session.undo_all();
    assert_eq!(session.current(), session.original());

    Ok(())
}

#[test]
fn histogram_follows_current_image() -> Result<(), EditorError> {
    let mut session = EditorSession::new(gradient_image()?, EditorConfig::default())?;

    let before = session.histogram()?;
    assert_eq!(before.iter().sum::<usize>(), 32);
    assert_eq!(before[0], 1);

    session.apply(Operation::Invert)?;
    let after = session.histogram()?;
    assert_eq!(after[255], 1);
    assert_eq!(after[0], 0);

    Ok(())
}

#[test]
fn other_intensity_channel() -> Result<(), EditorError> {
    let config = EditorConfig {
        intensity_channel: 0,
        ..Default::default()
    };
    let mut session = EditorSession::new(gradient_image()?, config)?;

    session.apply(Operation::Invert)?;
    assert!(session
        .current()
        .channel(0)?
        .as_slice()
        .iter()
        .all(|&v| v == 225));

    let image = session.into_image();
    assert_eq!(image.channel(2)?, gradient_image()?.channel(2)?);

    Ok(())
}
