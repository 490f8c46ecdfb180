use crate::parser::DEFAULT_SUB_QUESTION_MARKER;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 待上传试卷所在目录（.toml / .txt）
    pub documents_folder: String,
    /// Q16–17 中小题的起始标记
    pub sub_question_marker: String,
    /// 随机数种子，未设置时使用系统熵
    pub rng_seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 组好的练习卷导出文件 (JSON)
    pub exam_output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            documents_folder: "documents".to_string(),
            sub_question_marker: DEFAULT_SUB_QUESTION_MARKER.to_string(),
            rng_seed: None,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            exam_output_file: "exam.json".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            documents_folder: std::env::var("DOCUMENTS_FOLDER").unwrap_or(default.documents_folder),
            sub_question_marker: std::env::var("SUB_QUESTION_MARKER").unwrap_or(default.sub_question_marker),
            rng_seed: std::env::var("RNG_SEED").ok().and_then(|v| v.parse().ok()).or(default.rng_seed),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            exam_output_file: std::env::var("EXAM_OUTPUT_FILE").unwrap_or(default.exam_output_file),
        }
    }
}
