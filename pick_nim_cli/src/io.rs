use std::{
    fs::File,
    io::{self, Read, Stdin, Stdout, Write, stdin, stdout},
};

macro_rules! define_file_or_std {
    ($name:ident, $handle:ident, $std_enum:ident, $std_impl:ident, $std_mk:ident) => {
        #[derive(Debug, Clone)]
        pub enum $name {
            FilePath(String),
            $std_enum,
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    Self::$std_enum => write!(f, "-"),
                    Self::FilePath(value) => write!(f, "{value}"),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                if &value == "-" {
                    Self::$std_enum
                } else {
                    Self::FilePath(value)
                }
            }
        }

        impl $name {
            fn create_with<'a, F>(&'a self, f: F) -> io::Result<$handle>
            where
                F: FnOnce(&'a str) -> io::Result<File>,
            {
                match self {
                    Self::FilePath(fp) => Ok($handle::File(f(fp)?)),
                    Self::$std_enum => Ok($handle::$std_enum($std_mk())),
                }
            }
        }

        pub enum $handle {
            File(File),
            $std_enum($std_impl),
        }
    };
}

define_file_or_std!(FileOrStdout, FileOrStdoutWriter, Stdout, Stdout, stdout);

impl FileOrStdout {
    pub fn create(&self) -> io::Result<FileOrStdoutWriter> {
        self.create_with(File::create)
    }
}

impl Write for FileOrStdoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File(f) => f.write(buf),
            Self::Stdout(fd) => {
                let mut lock = fd.lock();
                lock.write(buf)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File(f) => f.flush(),
            Self::Stdout(fd) => {
                let mut lock = fd.lock();
                lock.flush()
            }
        }
    }
}

define_file_or_std!(FileOrStdin, FileOrStdinReader, Stdin, Stdin, stdin);

impl FileOrStdin {
    pub fn open(&self) -> io::Result<FileOrStdinReader> {
        self.create_with(File::open)
    }
}

impl Read for FileOrStdinReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(f) => f.read(buf),
            Self::Stdin(fd) => {
                let mut lock = fd.lock();
                lock.read(buf)
            }
        }
    }
}
