//! VCF/BCF file I/O
//!
//! This module opens variant files through noodles and adapts them to the
//! [`RecordSource`] and [`RecordSink`] traits used by the dedup filter.
//! The path `-` stands for stdin/stdout (plain VCF).

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use noodles::bcf;
use noodles::bgzf::io::{Reader as BgzfReader, Writer as BgzfWriter};
use noodles::vcf::{self, Header, variant::RecordBuf, variant::io::Write as VariantWrite};

use crate::algorithm::{RecordSink, RecordSource};
use crate::error::DedupError;
use crate::interval::{GenomeInterval, overlaps_any};
use crate::variant::Variant;

/// Path meaning stdin for input and stdout for output
pub const STDIO_PATH: &str = "-";

/// On-disk layout of a variant file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantFormat {
    Vcf,
    BgzfVcf,
    Bcf,
}

impl VariantFormat {
    /// Guess the format from a file name. Unknown extensions are plain VCF.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if name.ends_with(".bcf") {
            VariantFormat::Bcf
        } else if name.ends_with(".gz") || name.ends_with(".bgz") {
            VariantFormat::BgzfVcf
        } else {
            VariantFormat::Vcf
        }
    }
}

#[inline]
pub fn is_stdio<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref() == Path::new(STDIO_PATH)
}

enum Input {
    Vcf(vcf::io::Reader<Box<dyn BufRead>>),
    Bcf(bcf::io::Reader<BgzfReader<File>>, bcf::Record),
}

/// Ordered reader over the records of one VCF or BCF file
pub struct VariantReader {
    inner: Input,
    header: Header,
    intervals: Vec<GenomeInterval>,
    records_read: u64,
}

impl VariantReader {
    /// Open `path` and read its header. BGZF-compressed VCF is detected by noodles.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DedupError> {
        let path = path.as_ref();
        let source_open = |source: io::Error| DedupError::SourceOpen {
            path: path.to_path_buf(),
            source,
        };

        if is_stdio(path) {
            let stdin: Box<dyn BufRead> = Box::new(BufReader::new(io::stdin()));
            return Self::from_vcf_reader(vcf::io::Reader::new(stdin)).map_err(source_open);
        }

        match VariantFormat::from_path(path) {
            VariantFormat::Bcf => {
                let mut reader = File::open(path).map(bcf::io::Reader::new).map_err(source_open)?;
                let header = reader.read_header().map_err(source_open)?;
                Ok(Self {
                    inner: Input::Bcf(reader, bcf::Record::default()),
                    header,
                    intervals: Vec::new(),
                    records_read: 0,
                })
            }
            VariantFormat::Vcf | VariantFormat::BgzfVcf => {
                let reader = vcf::io::reader::Builder::default()
                    .build_from_path(path)
                    .map_err(source_open)?;
                Self::from_vcf_reader(reader).map_err(source_open)
            }
        }
    }

    /// Wrap an already opened VCF reader positioned at the start of the header.
    pub fn from_vcf_reader(mut reader: vcf::io::Reader<Box<dyn BufRead>>) -> io::Result<Self> {
        let header = reader.read_header()?;
        Ok(Self {
            inner: Input::Vcf(reader),
            header,
            intervals: Vec::new(),
            records_read: 0,
        })
    }

    /// Only yield records overlapping one of `intervals`. An empty list disables the restriction.
    pub fn with_intervals(mut self, intervals: Vec<GenomeInterval>) -> Self {
        self.intervals = intervals;
        self
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    fn next_record(&mut self) -> io::Result<Option<RecordBuf>> {
        match &mut self.inner {
            Input::Vcf(reader) => {
                let mut record = RecordBuf::default();
                match reader.read_record_buf(&self.header, &mut record)? {
                    0 => Ok(None),
                    _ => Ok(Some(record)),
                }
            }
            Input::Bcf(reader, buf) => match reader.read_record(buf)? {
                0 => Ok(None),
                _ => RecordBuf::try_from_variant_record(&self.header, &*buf).map(Some),
            },
        }
    }
}

impl RecordSource for VariantReader {
    type Record = RecordBuf;

    /// Records whose REF span overlaps no interval are skipped.
    fn read_record(&mut self) -> io::Result<Option<RecordBuf>> {
        while let Some(record) = self.next_record()? {
            self.records_read += 1;
            let (start, end) = (record.position(), record.reference_end());
            if overlaps_any(&self.intervals, record.chromosome(), start, end) {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    fn records_read(&self) -> Option<u64> {
        Some(self.records_read)
    }
}

enum Output {
    Vcf(vcf::io::Writer<BufWriter<Box<dyn Write>>>),
    BgzfVcf(vcf::io::Writer<BgzfWriter<File>>),
    Bcf(bcf::io::Writer<BgzfWriter<File>>),
}

/// Writer for surviving records, emitting the input header first
pub struct VariantWriter {
    inner: Option<Output>,
    header: Header,
}

impl VariantWriter {
    /// Create `path` and write `header` to it. The format follows the extension.
    pub fn create<P: AsRef<Path>>(path: P, header: &Header) -> Result<Self, DedupError> {
        let path = path.as_ref();
        let sink_open = |source: io::Error| DedupError::SinkOpen {
            path: path.to_path_buf(),
            source,
        };

        if is_stdio(path) {
            let stdout: Box<dyn Write> = Box::new(io::stdout().lock());
            return Self::from_vcf_writer(stdout, header).map_err(sink_open);
        }

        let file = File::create(path).map_err(sink_open)?;
        let output = match VariantFormat::from_path(path) {
            VariantFormat::Vcf => Output::Vcf(vcf::io::Writer::new(BufWriter::new(
                Box::new(file) as Box<dyn Write>,
            ))),
            VariantFormat::BgzfVcf => Output::BgzfVcf(vcf::io::Writer::new(BgzfWriter::new(file))),
            VariantFormat::Bcf => Output::Bcf(bcf::io::Writer::new(file)),
        };

        Self::with_output(output, header).map_err(sink_open)
    }

    /// Plain VCF onto any writer.
    pub fn from_vcf_writer(inner: Box<dyn Write>, header: &Header) -> io::Result<Self> {
        Self::with_output(Output::Vcf(vcf::io::Writer::new(BufWriter::new(inner))), header)
    }

    fn with_output(mut output: Output, header: &Header) -> io::Result<Self> {
        match &mut output {
            Output::Vcf(w) => w.write_variant_header(header)?,
            Output::BgzfVcf(w) => w.write_variant_header(header)?,
            Output::Bcf(w) => w.write_variant_header(header)?,
        }
        Ok(Self {
            inner: Some(output),
            header: header.clone(),
        })
    }

    fn closed() -> io::Error {
        io::Error::new(io::ErrorKind::BrokenPipe, "variant writer already finished")
    }
}

impl RecordSink<RecordBuf> for VariantWriter {
    fn write_record(&mut self, record: &RecordBuf) -> io::Result<()> {
        match self.inner.as_mut().ok_or_else(Self::closed)? {
            Output::Vcf(w) => w.write_variant_record(&self.header, record),
            Output::BgzfVcf(w) => w.write_variant_record(&self.header, record),
            Output::Bcf(w) => w.write_variant_record(&self.header, record),
        }
    }

    /// Flush the output and write the BGZF EOF block where there is one.
    fn finish(&mut self) -> io::Result<()> {
        match self.inner.take().ok_or_else(Self::closed)? {
            Output::Vcf(w) => w.into_inner().flush(),
            Output::BgzfVcf(w) => w.into_inner().finish().map(|_| ()),
            Output::Bcf(w) => w.into_inner().finish().map(|_| ()),
        }
    }
}

/// Open the input and output for a run. The output is only created once
/// the input header has been read.
pub fn open_pair(
    input: &Path,
    output: &Path,
    intervals: Vec<GenomeInterval>,
) -> Result<(VariantReader, VariantWriter), DedupError> {
    let reader = VariantReader::open(input)?.with_intervals(intervals);
    let writer = VariantWriter::create(output, reader.header())?;
    Ok((reader, writer))
}

/// Display form of an I/O path, `-` shown as the stream it stands for
pub fn describe_path(path: &Path, stdio: &str) -> String {
    if is_stdio(path) {
        stdio.to_string()
    } else {
        path.display().to_string()
    }
}
