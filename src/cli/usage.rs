//! Usage text.
//!
//! Defaults are read from configuration instances, never restated here.

use crate::config::{DistConfig, SketchConfig};

/// Usage of the program as a whole.
pub fn top_level_usage(prog: &str) -> String {
    format!(
        "Usage:
  {prog} <command> [options] [arguments ...]

Commands:

  sketch: reduce multiple genomes into one sketch.
    A genome corresponds to an input sequence file or to a named group of
    consecutive sequences in it.
    A sketch consists of a set of output files.

  dist: estimate distance (and relevant statistics) between
    genomes in query sketch and genomes in target sketch.
    Query and target sketches are generated by the sketch command.

Notes:

  To see command-specific usage, please enter
    {prog} command --help

  The format for options is --NAME=VALUE

"
    )
}

/// Usage of the sketch command, showing the defaults held by `defaults`.
pub fn sketch_usage(prog: &str, defaults: &SketchConfig) -> String {
    format!(
        "Usage: {prog} sketch [options] [arguments ...]

Arguments:

  Zero or more filenames. If zero filenames, then read from each line in listfname.
  Each filename specifies a path to a sequence file.

Options with [default values]:

  --help : Show this help message.

  --listfname : Name of the file associating consecutive sequences to genomes
    (including metagenomes and pangenomes).
    Each line of this file has the following format:
    \"Path-to-a-sequence-file(F) <TAB> [genome-name(G) <TAB> number-of-consecutive-sequences(N) ...]\".
    If only F is provided, then use F as G and let N be the number of sequences in F [{listfname}]

  --nthreads : This many threads will be spawned for processing. [{nthreads}]

  --minhashtype : Type of minhash.
    -1 means perfect hash function for nucleotides where 5^(kmerlen) < 2^63.
    0 means one hash-function with multiple min-values.
    1 means multiple hash-functions and one min-value per function.
    2 means one hash-function with partitioned buckets. [{minhashtype}]

  --bbits : Number of bits kept as in b-bits minhash. [{bbits}]

  --kmerlen : K-mer length used to generate minhash values. [{kmerlen}]

  --sketchsize64 : Sketch size divided by 64, or equivalently,
    the number of sets (each consisting of 64 minhash values) per genome. [{sketchsize64}]

  --isstrandpreserved : Preserve strand, which means ignore reverse complement. [{isstrandpreserved}]

  --iscasepreserved : Preserve case, which means the lowercase and uppercase versions of the
    same letter are treated as two different letters. [{iscasepreserved}]

  --randseed : Seed to provide to the hash function. [{randseed}]

  --outfname : Name of the file containing sketches as output [{outfname} (time-dependent)]

Notes:

  \"-\" (without quotes) means stdin.
  For general usage, please enter
    {prog} --help

  The following is an example of options: --nthreads=8

",
        listfname = defaults.listfname,
        nthreads = defaults.nthreads,
        minhashtype = defaults.minhashtype,
        bbits = defaults.bbits,
        kmerlen = defaults.kmerlen,
        sketchsize64 = defaults.sketchsize64,
        isstrandpreserved = defaults.isstrandpreserved,
        iscasepreserved = defaults.iscasepreserved,
        randseed = defaults.randseed,
        outfname = defaults.outfname,
    )
}

/// Usage of the dist command, showing the defaults held by `defaults`.
pub fn dist_usage(prog: &str, defaults: &DistConfig) -> String {
    format!(
        "Usage: {prog} dist [options] query-sketch [target-sketch]

  Query-sketch and target-sketch: sketches used as query and target.
    Sketches are generated by \"{prog} sketch\" (without quotes).
    If target-sketch is omitted, then query-sketch is used as both query and target.

Options:

  --help : Show this help message.

  --ithres : If intersection(A, B) has less than this number of elements,
    then set the intersection to empty set so that the resulting Jaccard-index is zero. [{ithres}]

  --mthres : Only results with at most this mutation distance are reported. [{mthres}]

  --nneighbors : Only this number of best-hit results per query are reported.
    If this value is zero then report all. [{nneighbors}]

  --nthreads : This many threads will be spawned for processing. [{nthreads}]

  --outfname : The output file comparing the query and target sketches.
    The output file contains the following tab-separated fields per result line:
    query-sketch, target-sketch, mutation-distance, p-value, and jaccard-index. [{outfname}]

  --pthres : Only results with at most this p-value are reported. [{pthres}]

Note:

  If target-sketch is omitted and --nneighbors is zero,
    then distance from genome A to genome B is the same as distance from B to A.
    In this case, only one record is reported per set of two genomes due to reflectivity.

  \"-\" (without quotes) means stdout.

  For general usage, please enter
    {prog} --help

  The following is an example of options: --mthres=0.2

",
        ithres = defaults.ithres,
        mthres = defaults.mthres,
        nneighbors = defaults.nneighbors,
        nthreads = defaults.nthreads,
        outfname = defaults.outfname,
        pthres = defaults.pthres,
    )
}
