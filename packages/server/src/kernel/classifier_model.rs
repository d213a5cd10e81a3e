//! BERT sequence classifier loaded from a fine-tuned checkpoint directory.
//!
//! Expects the usual sequence-classification export layout:
//!
//! ```text
//! <checkpoint>/config.json
//! <checkpoint>/tokenizer.json
//! <checkpoint>/model.safetensors
//! ```
//!
//! Weights are `bert.*` (encoder + pooler) and `classifier.*` (linear head).

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use candle_core::{DType, Device, IndexOp, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use serde::Deserialize;
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};
use tracing::info;

use super::BaseCategoryModel;

/// Fields of `config.json` the classification head needs.
#[derive(Debug, Deserialize)]
struct HeadConfig {
    hidden_size: usize,
    #[serde(default)]
    num_labels: Option<usize>,
    #[serde(default)]
    id2label: Option<HashMap<String, String>>,
}

impl HeadConfig {
    fn label_count(&self) -> Option<usize> {
        self.id2label
            .as_ref()
            .map(HashMap::len)
            .or(self.num_labels)
    }
}

pub struct BertCategoryModel {
    bert: BertModel,
    pooler: Linear,
    classifier: Linear,
    tokenizer: Tokenizer,
    device: Device,
    num_labels: usize,
}

impl BertCategoryModel {
    /// Load tokenizer, config and weights. `max_length` bounds tokens per review.
    pub fn load(checkpoint: &Path, num_labels: usize, max_length: usize) -> Result<Self> {
        let device = Device::cuda_if_available(0)?;

        let config_path = checkpoint.join("config.json");
        let raw_config = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let bert_config: BertConfig =
            serde_json::from_str(&raw_config).context("Invalid BERT config")?;
        let head: HeadConfig =
            serde_json::from_str(&raw_config).context("Invalid classification config")?;

        if let Some(found) = head.label_count() {
            if found != num_labels {
                bail!(
                    "Checkpoint has {} labels, expected {}",
                    found,
                    num_labels
                );
            }
        }

        let mut tokenizer = Tokenizer::from_file(checkpoint.join("tokenizer.json"))
            .map_err(anyhow::Error::msg)
            .context("Failed to load tokenizer")?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length,
                ..Default::default()
            }))
            .map_err(anyhow::Error::msg)?;
        tokenizer.with_padding(Some(PaddingParams {
            strategy: PaddingStrategy::BatchLongest,
            ..Default::default()
        }));

        let weights = checkpoint.join("model.safetensors");
        // SAFETY: the weights file is memory-mapped read-only and not modified while loaded.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights], DType::F32, &device)? };

        let bert = BertModel::load(vb.pp("bert"), &bert_config).context("Failed to load encoder")?;
        let pooler = candle_nn::linear(
            head.hidden_size,
            head.hidden_size,
            vb.pp("bert").pp("pooler").pp("dense"),
        )
        .context("Failed to load pooler")?;
        let classifier = candle_nn::linear(head.hidden_size, num_labels, vb.pp("classifier"))
            .context("Failed to load classification head")?;

        info!(
            checkpoint = %checkpoint.display(),
            num_labels,
            max_length,
            device = ?device,
            "Classification model and tokenizer loaded"
        );

        Ok(Self {
            bert,
            pooler,
            classifier,
            tokenizer,
            device,
            num_labels,
        })
    }

    fn batch_tensors(&self, texts: &[String]) -> Result<(Tensor, Tensor, Tensor)> {
        let inputs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let encodings = self
            .tokenizer
            .encode_batch(inputs, true)
            .map_err(anyhow::Error::msg)?;

        let mut ids = Vec::with_capacity(encodings.len());
        let mut type_ids = Vec::with_capacity(encodings.len());
        let mut masks = Vec::with_capacity(encodings.len());
        for encoding in &encodings {
            ids.push(Tensor::new(encoding.get_ids(), &self.device)?);
            type_ids.push(Tensor::new(encoding.get_type_ids(), &self.device)?);
            masks.push(Tensor::new(encoding.get_attention_mask(), &self.device)?);
        }

        Ok((
            Tensor::stack(&ids, 0)?,
            Tensor::stack(&type_ids, 0)?,
            Tensor::stack(&masks, 0)?,
        ))
    }
}

impl BaseCategoryModel for BertCategoryModel {
    fn num_labels(&self) -> usize {
        self.num_labels
    }

    fn logits(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let (input_ids, token_type_ids, attention_mask) = self.batch_tensors(texts)?;
        let hidden = self
            .bert
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;

        // [CLS] token → pooler (dense + tanh) → classification head
        let cls = hidden.i((.., 0))?;
        let pooled = self.pooler.forward(&cls)?.tanh()?;
        let logits = self.classifier.forward(&pooled)?;

        Ok(logits.to_dtype(DType::F32)?.to_vec2::<f32>()?)
    }
}
