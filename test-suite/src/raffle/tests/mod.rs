mod init;
mod queries;
