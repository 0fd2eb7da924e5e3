use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use contracts::domain::complaint::{AttachmentLedger, FileAttachment, SubmitError};
use wasm_bindgen_futures::JsFuture;

/// Read the picked files into base64 attachments, in selection order.
///
/// The count limit is checked before anything is read. Each file is
/// accounted in the ledger (per-file cap, then running total) before its
/// read starts, so an oversized pick never reaches the encoder. Reads are
/// strictly sequential; the first failure discards everything.
pub async fn collect_attachments(
    files: Vec<web_sys::File>,
) -> Result<Vec<FileAttachment>, SubmitError> {
    AttachmentLedger::check_count(files.len())?;

    let mut ledger = AttachmentLedger::new();
    let mut attachments = Vec::with_capacity(files.len());

    for file in files {
        ledger.add(&file.name(), file.size() as u64)?;
        attachments.push(read_attachment(&file).await?);
    }

    log::debug!(
        "collected {} attachment(s), {} bytes total",
        attachments.len(),
        ledger.total()
    );

    Ok(attachments)
}

/// Read one file fully into memory and base64-encode it
async fn read_attachment(file: &web_sys::File) -> Result<FileAttachment, SubmitError> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| SubmitError::FileRead(file.name()))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    Ok(FileAttachment {
        file_name: file.name(),
        data: STANDARD.encode(&bytes),
        mime_type: file.type_(),
    })
}
